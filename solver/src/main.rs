//! Plays a dealt board to the end by always taking the first hint, printing every match.

use clap::Parser;
use pairlink::config::GameConfig;
use pairlink::controller::GameOutcome;
use pairlink::generator::BoardGenerator;
use pairlink::{SelectionController, Shape, Tile};
use strum::VariantArray;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unordered_pair::UnorderedPair;

/// Deal a Shisen-Sho board and play it out with hints
#[derive(Parser, Debug)]
#[command(name = "solver")]
#[command(version)]
struct Cli {
    /// Side length of the board; must be even. Sizes 2 and 4 use the shape palette,
    /// larger boards up to 12 use printable ASCII characters
    #[arg(short, long, default_value = "4")]
    size: usize,

    /// Seed for dealing; omit for a random board
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), pairlink::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.size.saturating_mul(cli.size) / 2 <= Shape::VARIANTS.len() {
        play(GameConfig::default().with_size(cli.size), cli.seed)
    } else {
        // '.' marks cleared cells when printed
        let palette = ('!'..='~').filter(|c| *c != '.').collect();
        play(GameConfig::new(cli.size, palette), cli.seed)
    }
}

fn play<T: Tile>(mut config: GameConfig<T>, seed: Option<u64>) -> Result<(), pairlink::Error> {
    config.seed = seed;
    let mut controller = SelectionController::start(BoardGenerator::new(config)?);

    println!("{}", controller.board());

    while let Some((UnorderedPair(a, b), path)) = controller.hint() {
        println!("{} -> {} via {}", a, b, path.route());
        println!("{}", controller.board().overlay(&path));

        controller.select_cell(a);
        controller.select_cell(b);
    }

    match controller.outcome() {
        GameOutcome::Won => info!("cleared the board"),
        GameOutcome::InProgress => info!(remaining = controller.board().remaining_count(), "no moves left"),
    }

    Ok(())
}
