use thiserror::Error;

/// Root decisions requested in a position that cannot support them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No usable pieces left to hand over")]
    NoUsablePieces,

    #[error("No piece selected for placement")]
    NoSelectedPiece,

    #[error("No free spots on the board")]
    NoFreeSpots,

    #[error("Invalid search budget: {0}")]
    InvalidBudget(String),
}
