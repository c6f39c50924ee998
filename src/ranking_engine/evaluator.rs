use std::cmp::Ordering;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ranking_engine::detectors::{self, sort_by_value};
use crate::ranking_engine::error::{EngineError, Result};
use crate::ranking_engine::models::{Card, HandCategory, Rank};

const FOUR_OF_A_KIND_KICKERS: usize = 1;
const THREE_OF_A_KIND_KICKERS: usize = 2;
const TWO_PAIR_KICKERS: usize = 1;
const PAIR_KICKERS: usize = 3;
const HIGH_CARD_KICKERS: usize = 4;

/// The best ranking found in a set of cards.
///
/// A pure function of the input cards: classifying the same cards again
/// always yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: HandCategory,
    /// Input cards, highest value first (stable for equal values).
    pub cards: Vec<Card>,
    /// The 1–5 cards that justify `category`.
    pub active_cards: Vec<Card>,
    /// Tie-break cards, highest first.
    pub kickers: Vec<Card>,
    /// Category label, e.g. "Full House".
    pub short_name: String,
    /// Descriptive label, e.g. "Full House of Kings over 2s".
    pub long_name: String,
}

impl Classification {
    /// Order two classifications by strength: category, then active cards,
    /// then kickers, each compared positionally by value.
    pub fn compare(&self, other: &Classification) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| values(&self.active_cards).cmp(&values(&other.active_cards)))
            .then_with(|| values(&self.kickers).cmp(&values(&other.kickers)))
    }
}

fn values(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(Card::value).collect()
}

/// Ranking chosen by the precedence walk, before the input cards are attached.
struct Ranking {
    category: HandCategory,
    active_cards: Vec<Card>,
    kickers: Vec<Card>,
    long_name: String,
}

impl Ranking {
    fn new(category: HandCategory, active_cards: Vec<Card>, long_name: String) -> Self {
        Ranking { category, active_cards, kickers: Vec::new(), long_name }
    }

    fn with_kickers(mut self, kickers: &[Card], count: usize) -> Self {
        self.kickers = kickers.iter().take(count).copied().collect();
        self
    }
}

/// Classify 1–9 cards into their best ranking category.
///
/// Fails with [`EngineError::FlushPrecondition`] on 10 or more cards and with
/// [`EngineError::EmptyHand`] on no cards. Fewer than five cards simply never
/// reach the five-card categories.
pub fn classify_hand(cards: &[Card]) -> Result<Classification> {
    let sorted = sort_by_value(cards);
    let ranking = rank_sorted(&sorted)?;

    debug!(
        "classified {} cards as {} ({} active, {} kickers)",
        sorted.len(),
        ranking.long_name,
        ranking.active_cards.len(),
        ranking.kickers.len(),
    );

    Ok(Classification {
        category: ranking.category,
        cards: sorted,
        active_cards: ranking.active_cards,
        kickers: ranking.kickers,
        short_name: ranking.category.name().to_string(),
        long_name: ranking.long_name,
    })
}

/// Walk the categories strongest first; the first match wins.
fn rank_sorted(cards: &[Card]) -> Result<Ranking> {
    let flush = detectors::flush(cards)?;

    if let Some(flush) = &flush {
        if let Some(run) = detectors::straight(&flush.cards, true) {
            let high = run[0].rank();
            return Ok(if high == Rank::Ace {
                Ranking::new(
                    HandCategory::RoyalFlush,
                    run,
                    format!("{} of {}", HandCategory::RoyalFlush, flush.suit),
                )
            } else {
                Ranking::new(
                    HandCategory::StraightFlush,
                    run,
                    format!("{}-High {} of {}", high, HandCategory::StraightFlush, flush.suit),
                )
            });
        }
    }

    if let Some(quads) = detectors::four_of_a_kind(cards) {
        let name = format!("{}, {}", HandCategory::FourOfAKind, quads.rank.plural());
        return Ok(Ranking::new(HandCategory::FourOfAKind, quads.cards, name)
            .with_kickers(&quads.kickers, FOUR_OF_A_KIND_KICKERS));
    }

    let trips = detectors::three_of_a_kind(cards);

    if let Some(trips) = &trips {
        // Kickers are sorted, so the first adjacent equal pair is the highest.
        let paired = trips
            .kickers
            .windows(2)
            .find(|w| w[0].value() == w[1].value());
        if let Some(paired) = paired {
            let name = format!(
                "{} of {} over {}",
                HandCategory::FullHouse,
                trips.rank.plural(),
                paired[0].rank().plural(),
            );
            let mut active = trips.cards.clone();
            active.extend_from_slice(paired);
            return Ok(Ranking::new(HandCategory::FullHouse, active, name));
        }
    }

    if let Some(flush) = flush {
        let name = format!("{}-High {} of {}", flush.cards[0].rank(), HandCategory::Flush, flush.suit);
        return Ok(Ranking::new(HandCategory::Flush, flush.cards, name));
    }

    if let Some(run) = detectors::straight(cards, true) {
        let name = format!("{}-High {}", run[0].rank(), HandCategory::Straight);
        return Ok(Ranking::new(HandCategory::Straight, run, name));
    }

    if let Some(trips) = trips {
        let name = format!("{}, {}", HandCategory::ThreeOfAKind, trips.rank.plural());
        return Ok(Ranking::new(HandCategory::ThreeOfAKind, trips.cards, name)
            .with_kickers(&trips.kickers, THREE_OF_A_KIND_KICKERS));
    }

    if let Some(pair) = detectors::pair(cards) {
        if let Some(second) = detectors::pair(&pair.kickers) {
            let name = format!(
                "{}, {} and {}",
                HandCategory::TwoPair,
                pair.rank.plural(),
                second.rank.plural(),
            );
            let mut active = pair.cards;
            active.extend(second.cards);
            return Ok(Ranking::new(HandCategory::TwoPair, active, name)
                .with_kickers(&second.kickers, TWO_PAIR_KICKERS));
        }

        let name = format!("{} of {}", HandCategory::Pair, pair.rank.plural());
        return Ok(Ranking::new(HandCategory::Pair, pair.cards, name)
            .with_kickers(&pair.kickers, PAIR_KICKERS));
    }

    let high = detectors::high_card(cards).ok_or(EngineError::EmptyHand)?;
    let rest: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|c| c.value() != high.value())
        .collect();
    Ok(Ranking::new(HandCategory::HighCard, vec![high], format!("{} High", high.rank()))
        .with_kickers(&rest, HIGH_CARD_KICKERS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking_engine::models::Suit::{self, *};
    use Rank::*;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn classify(cards: &[Card]) -> Classification {
        classify_hand(cards).unwrap()
    }

    #[test]
    fn royal_flush() {
        let hand = classify(&[
            c(Ten, Hearts), c(Ace, Hearts), c(Queen, Hearts), c(King, Hearts),
            c(Jack, Hearts), c(Two, Clubs), c(Ace, Spades),
        ]);
        assert_eq!(hand.category, HandCategory::RoyalFlush);
        assert_eq!(hand.long_name, "Royal Flush of Hearts");
        assert_eq!(hand.active_cards[0], c(Ace, Hearts));
        assert!(hand.kickers.is_empty());
    }

    #[test]
    fn straight_flush_beats_flush_and_straight() {
        let hand = classify(&[c(Two, Clubs), c(Three, Clubs), c(Four, Clubs), c(Five, Clubs), c(Six, Clubs)]);
        assert_eq!(hand.category, HandCategory::StraightFlush);
        assert_eq!(hand.short_name, "Straight Flush");
        assert_eq!(hand.long_name, "6-High Straight Flush of Clubs");
    }

    #[test]
    fn steel_wheel_is_five_high_not_royal() {
        let hand = classify(&[c(Ace, Spades), c(Two, Spades), c(Three, Spades), c(Four, Spades), c(Five, Spades)]);
        assert_eq!(hand.category, HandCategory::StraightFlush);
        assert_eq!(hand.long_name, "5-High Straight Flush of Spades");
        assert_eq!(hand.active_cards[4], c(Ace, Spades));
    }

    #[test]
    fn four_of_a_kind_keeps_one_kicker() {
        let hand = classify(&[
            c(King, Clubs), c(King, Diamonds), c(King, Hearts), c(King, Spades),
            c(Three, Clubs), c(Nine, Hearts), c(Nine, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::FourOfAKind);
        assert_eq!(hand.long_name, "Four of a Kind, Kings");
        assert_eq!(hand.kickers, vec![c(Nine, Hearts)]);
    }

    #[test]
    fn full_house_of_twos_over_fives() {
        let hand = classify(&[c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Five, Spades), c(Five, Diamonds)]);
        assert_eq!(hand.category, HandCategory::FullHouse);
        assert_eq!(hand.long_name, "Full House of 2s over 5s");
        assert_eq!(hand.active_cards, vec![
            c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Five, Spades), c(Five, Diamonds),
        ]);
        assert!(hand.kickers.is_empty());
    }

    #[test]
    fn two_trips_use_highest_triple_and_next_rank_as_pair() {
        let hand = classify(&[
            c(Seven, Clubs), c(Seven, Hearts), c(Seven, Spades),
            c(Queen, Clubs), c(Queen, Diamonds), c(Queen, Hearts), c(Ace, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::FullHouse);
        assert_eq!(hand.long_name, "Full House of Queens over 7s");
        assert_eq!(&hand.active_cards[3..], &[c(Seven, Clubs), c(Seven, Hearts)]);
    }

    #[test]
    fn full_house_picks_highest_pair_in_remainder() {
        let hand = classify(&[
            c(Four, Clubs), c(Four, Hearts), c(Four, Spades),
            c(Nine, Clubs), c(Nine, Diamonds), c(Jack, Hearts), c(Jack, Clubs),
        ]);
        assert_eq!(hand.long_name, "Full House of 4s over Jacks");
    }

    #[test]
    fn flush_has_no_kickers() {
        let hand = classify(&[
            c(Two, Diamonds), c(Nine, Diamonds), c(Jack, Diamonds), c(Four, Diamonds),
            c(Queen, Diamonds), c(Queen, Spades), c(Eight, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::Flush);
        assert_eq!(hand.long_name, "Queen-High Flush of Diamonds");
        assert_eq!(hand.active_cards.len(), 5);
        assert!(hand.kickers.is_empty());
    }

    #[test]
    fn wheel_straight_is_five_high() {
        let hand = classify(&[c(Ace, Clubs), c(Two, Diamonds), c(Three, Hearts), c(Four, Spades), c(Five, Clubs)]);
        assert_eq!(hand.category, HandCategory::Straight);
        assert_eq!(hand.long_name, "5-High Straight");
    }

    #[test]
    fn three_of_a_kind_keeps_two_kickers() {
        let hand = classify(&[
            c(Eight, Clubs), c(Eight, Hearts), c(Eight, Spades),
            c(Ace, Clubs), c(Two, Diamonds), c(Jack, Hearts), c(Four, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::ThreeOfAKind);
        assert_eq!(hand.long_name, "Three of a Kind, 8s");
        assert_eq!(hand.kickers, vec![c(Ace, Clubs), c(Jack, Hearts)]);
    }

    #[test]
    fn two_pair_keeps_best_remaining_card() {
        let hand = classify(&[
            c(King, Clubs), c(King, Hearts), c(Nine, Spades), c(Nine, Clubs),
            c(Four, Diamonds), c(Four, Hearts), c(Ace, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::TwoPair);
        assert_eq!(hand.long_name, "Two Pair, Kings and 9s");
        assert_eq!(hand.active_cards.len(), 4);
        assert_eq!(hand.kickers, vec![c(Ace, Clubs)]);
    }

    #[test]
    fn pair_keeps_three_kickers() {
        let hand = classify(&[
            c(Ten, Clubs), c(Ten, Hearts), c(Two, Spades), c(Six, Clubs),
            c(King, Diamonds), c(Eight, Hearts), c(Three, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::Pair);
        assert_eq!(hand.long_name, "Pair of 10s");
        assert_eq!(hand.kickers, vec![c(King, Diamonds), c(Eight, Hearts), c(Six, Clubs)]);
    }

    #[test]
    fn high_card_keeps_four_kickers() {
        let hand = classify(&[
            c(Ace, Clubs), c(Jack, Hearts), c(Two, Spades), c(Six, Clubs),
            c(Nine, Diamonds), c(Eight, Hearts), c(Three, Clubs),
        ]);
        assert_eq!(hand.category, HandCategory::HighCard);
        assert_eq!(hand.long_name, "Ace High");
        assert_eq!(hand.active_cards, vec![c(Ace, Clubs)]);
        assert_eq!(hand.kickers.len(), 4);
        assert_eq!(hand.kickers[0], c(Jack, Hearts));
    }

    #[test]
    fn short_hands_fall_through_gracefully() {
        let hole = classify(&[c(Queen, Clubs), c(Queen, Hearts)]);
        assert_eq!(hole.category, HandCategory::Pair);
        assert!(hole.kickers.is_empty());

        let single = classify(&[c(Three, Clubs)]);
        assert_eq!(single.category, HandCategory::HighCard);
        assert!(single.kickers.is_empty());
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(classify_hand(&[]), Err(EngineError::EmptyHand));
        let ten: Vec<Card> = Rank::ranks().take(10).map(|r| c(r, Hearts)).collect();
        assert_eq!(classify_hand(&ten), Err(EngineError::FlushPrecondition { count: 10 }));
    }

    #[test]
    fn compare_orders_by_category_then_cards() {
        let kings = classify(&[c(King, Clubs), c(King, Hearts), c(Two, Spades), c(Six, Clubs), c(Nine, Hearts)]);
        let kings_better_kicker =
            classify(&[c(King, Spades), c(King, Diamonds), c(Two, Clubs), c(Six, Hearts), c(Ten, Hearts)]);
        let trips = classify(&[c(Two, Clubs), c(Two, Hearts), c(Two, Spades), c(Six, Clubs), c(Nine, Hearts)]);

        assert_eq!(kings.compare(&kings_better_kicker), Ordering::Less);
        assert_eq!(trips.compare(&kings_better_kicker), Ordering::Greater);
        assert_eq!(kings.compare(&kings.clone()), Ordering::Equal);
    }
}
