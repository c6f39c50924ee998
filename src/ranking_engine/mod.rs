//! Core ranking engine: cards, deck, category detection, and lookahead odds.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Card primitives (`Rank`, `Suit`, `Card`) and `HandCategory` |
//! | `error`       | `EngineError` and the crate `Result` alias |
//! | `deck`        | 52-card deck with reset, Fisher-Yates shuffle and draw |
//! | `detectors`   | One pure detector per ranking shape (flush, straight, groups, high card) |
//! | `evaluator`   | `classify_hand()`: precedence walk producing a `Classification` |
//! | `probability` | Brute-force next-card category distribution |
//! | `deal`        | Board/hole dealing per street and the unseen-card pool |

pub mod deal;
pub mod deck;
pub mod detectors;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod probability;

// Re-export the public API surface so callers can use
// `ranking_engine::classify_hand` without reaching into sub-modules.
pub use deal::{Deal, DealRequest, Street};
pub use deck::Deck;
pub use error::{EngineError, Result};
pub use evaluator::{classify_hand, Classification};
pub use models::{Card, HandCategory, Rank, Suit, BOARD_SIZE, HOLE_SIZE};
pub use probability::{
    estimate_next_card_probabilities, estimate_with_config, EstimatorConfig, ProbabilityMap,
};
