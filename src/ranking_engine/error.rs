use thiserror::Error;

/// Errors surfaced by the ranking engine.
///
/// None of these are retryable: every engine operation is deterministic, so a
/// failed call fails the same way again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {rank} of {suit}")]
    InvalidCard { rank: String, suit: String },

    #[error("Deck is empty")]
    EmptyDeck,

    #[error("Flush check needs fewer than 10 cards, got {count}")]
    FlushPrecondition { count: usize },

    #[error("Cannot classify an empty hand")]
    EmptyHand,
}

pub type Result<T> = std::result::Result<T, EngineError>;
