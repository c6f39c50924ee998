//! Category detectors: one stateless function per ranking shape.
//!
//! Each detector works on an arbitrary card slice and reports either a
//! structured match or `None`. None of them look for stronger shapes hiding in
//! the same cards; precedence between categories is the evaluator's job.
//!
//! All detectors order their input with [`sort_by_value`], a *stable*
//! descending sort, so cards of equal value keep their input order. That order
//! decides which card instance ends up in an active or kicker list.

use crate::ranking_engine::error::{EngineError, Result};
use crate::ranking_engine::models::{Card, Rank, Suit};

/// Largest input the flush check accepts (exclusive).
pub const FLUSH_INPUT_LIMIT: usize = 10;

/// Cards in a made five-card shape.
const SHAPE_SIZE: usize = 5;

/// A suit with at least five cards and its five highest cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushMatch {
    pub suit: Suit,
    /// Five cards, highest first.
    pub cards: Vec<Card>,
}

/// A group of same-rank cards plus every other card as kickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch {
    pub rank: Rank,
    pub cards: Vec<Card>,
    /// All cards of a different rank, highest first.
    pub kickers: Vec<Card>,
}

/// Copy of `cards` sorted highest value first; ties keep input order.
pub fn sort_by_value(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.value().cmp(&a.value()));
    sorted
}

/// Cards bucketed by suit in canonical suit order, each bucket in input order.
pub fn group_by_suit(cards: &[Card]) -> Vec<(Suit, Vec<Card>)> {
    Suit::suits()
        .map(|suit| (suit, cards.iter().copied().filter(|c| c.suit() == suit).collect()))
        .collect()
}

/// Cards bucketed by rank, lowest rank first, each bucket in input order.
pub fn group_by_rank(cards: &[Card]) -> Vec<(Rank, Vec<Card>)> {
    Rank::ranks()
        .map(|rank| (rank, cards.iter().copied().filter(|c| c.rank() == rank).collect()))
        .collect()
}

/// Five highest cards of the first suit holding at least five cards.
///
/// Fails with [`EngineError::FlushPrecondition`] on 10 or more cards, where two
/// suits could both qualify.
pub fn flush(cards: &[Card]) -> Result<Option<FlushMatch>> {
    if cards.len() >= FLUSH_INPUT_LIMIT {
        return Err(EngineError::FlushPrecondition { count: cards.len() });
    }

    let found = group_by_suit(cards)
        .into_iter()
        .find(|(_, suited)| suited.len() >= SHAPE_SIZE)
        .map(|(suit, suited)| {
            let mut best = sort_by_value(&suited);
            best.truncate(SHAPE_SIZE);
            FlushMatch { suit, cards: best }
        });

    Ok(found)
}

/// Highest run of five consecutive values, highest card first.
///
/// Duplicate values are dropped before scanning (the first card of each value
/// is kept). With `allow_wheel`, A-5-4-3-2 also counts and is returned as
/// `[5, 4, 3, 2, A]` so the five is the high card.
pub fn straight(cards: &[Card], allow_wheel: bool) -> Option<Vec<Card>> {
    let mut distinct = sort_by_value(cards);
    distinct.dedup_by_key(|c| c.value());

    if distinct.len() < SHAPE_SIZE {
        return None;
    }

    let run = distinct.windows(SHAPE_SIZE).find(|window| {
        window
            .windows(2)
            .all(|pair| pair[0].value() == pair[1].value() + 1)
    });
    if let Some(run) = run {
        return Some(run.to_vec());
    }

    if allow_wheel && distinct[0].rank() == Rank::Ace {
        let low = &distinct[distinct.len() - 4..];
        let is_wheel = low
            .iter()
            .map(|c| c.value())
            .eq([Rank::Five, Rank::Four, Rank::Three, Rank::Two].map(Rank::value));
        if is_wheel {
            let mut wheel = low.to_vec();
            wheel.push(distinct[0]);
            return Some(wheel);
        }
    }

    None
}

/// Highest-ranked group of exactly `size` cards.
///
/// Lower groups of the same size are ignored, never combined.
fn group_of(cards: &[Card], size: usize) -> Option<GroupMatch> {
    let sorted = sort_by_value(cards);
    let (rank, group) = group_by_rank(&sorted)
        .into_iter()
        .rev()
        .find(|(_, group)| group.len() == size)?;

    let kickers = sorted.into_iter().filter(|c| c.rank() != rank).collect();
    Some(GroupMatch { rank, cards: group, kickers })
}

pub fn four_of_a_kind(cards: &[Card]) -> Option<GroupMatch> {
    group_of(cards, 4)
}

pub fn three_of_a_kind(cards: &[Card]) -> Option<GroupMatch> {
    group_of(cards, 3)
}

pub fn pair(cards: &[Card]) -> Option<GroupMatch> {
    group_of(cards, 2)
}

/// The highest card; the first one seen wins a tie.
pub fn high_card(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().fold(None, |best, card| match best {
        Some(b) if card.value() <= b.value() => Some(b),
        _ => Some(card),
    })
}
