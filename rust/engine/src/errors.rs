use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GameError {
    #[error("Invalid card token: {0:?}")]
    InvalidCard(String),
    #[error("Expected exactly 2 hole cards, got {0}")]
    HoleCardCount(usize),
    #[error("Board must hold 0, 3, 4 or 5 cards, got {0}")]
    BoardSize(usize),
    #[error("Invalid contribution amount: {0}")]
    InvalidAmount(f64),
    #[error("Response distribution has no positive weight")]
    EmptyDistribution,
    #[error("Unknown {kind}: {value:?}")]
    UnknownName { kind: &'static str, value: String },
    #[error("Hand already complete")]
    HandAlreadyComplete,
}
