use derive_more::{Display, Error, From};

use crate::board::BoardError;
use crate::builder::BuildError;
use crate::generator::InvalidConfiguration;
use crate::path::PrecompositionError;

/// Any error this crate can report, for callers that want a single type to `?` into.
///
/// None of these are recoverable by retrying; each means the inputs to the failing call must change.
#[derive(Clone, Debug, Display, Error, From, Eq, PartialEq)]
pub enum Error {
    /// A direct board query used a location off the board.
    #[display("{_0}")]
    Board(BoardError),
    /// A hand-made board could not be built.
    #[display("{_0}")]
    Build(BuildError),
    /// A board could not be dealt from the given size and palette.
    #[display("{_0}")]
    Configuration(InvalidConfiguration),
    /// Path search was asked to connect tiles it never should have been given.
    #[display("{_0}")]
    Precomposition(PrecompositionError),
}
