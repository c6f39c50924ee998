//! # poker_hand_rank
//!
//! Poker hand classification and next-card outcome odds.
//!
//! Given 1–9 cards (2–7 in practice) the engine finds the best five-card
//! ranking category, the cards that make it, the ordered tie-break kickers and
//! a readable name. It can also tell how likely each category is once one more
//! card from the unseen pool is revealed.
//!
//! ## How it works
//!
//! 1. Deal cards from a [`Deck`] (or build [`Card`]s directly). The deck never
//!    owns a random source; pass one to [`Deck::shuffle`], or use a [`Deal`]
//!    with an optional seed.
//! 2. Call [`classify_hand`]: detectors run in fixed precedence order, from
//!    straight flush down to high card, and the first match wins.
//! 3. Call [`estimate_next_card_probabilities`] with the unseen cards: every
//!    candidate is appended and classified, and the counts are normalised.
//!
//! Everything is synchronous and pure apart from the shuffle. Enable the
//! **`parallel`** feature to spread the lookahead over the rayon pool.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_hand_rank::{classify_hand, Card, HandCategory, Rank, Suit};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::Two, Suit::Diamonds),
//!     Card::new(Rank::Three, Suit::Hearts),
//!     Card::new(Rank::Four, Suit::Spades),
//!     Card::new(Rank::Five, Suit::Clubs),
//! ];
//! let hand = classify_hand(&cards).unwrap();
//! assert_eq!(hand.category, HandCategory::Straight);
//! assert_eq!(hand.long_name, "5-High Straight");
//! ```
//!
//! Walking a dealt hand street by street:
//!
//! ```rust
//! use poker_hand_rank::{Deal, DealRequest, EstimatorConfig, Street};
//!
//! let deal = Deal::new(DealRequest::seeded(42)).unwrap();
//! for street in Street::streets() {
//!     let hand = deal.classify(street).unwrap();
//!     let odds = deal.next_card_probabilities(street, &EstimatorConfig::default()).unwrap();
//!     println!("{street}: {} (next card most likely {})", hand.long_name, odds.most_likely());
//! }
//! ```

pub mod ranking_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `poker_hand_rank::classify_hand`
// directly without reaching into `ranking_engine::`.
pub use ranking_engine::{
    classify_hand, estimate_next_card_probabilities, estimate_with_config, Card,
    Classification, Deal, DealRequest, Deck, EngineError, EstimatorConfig, HandCategory,
    ProbabilityMap, Rank, Result, Street, Suit, BOARD_SIZE, HOLE_SIZE,
};
pub use view_adapter::to_hand_view;
