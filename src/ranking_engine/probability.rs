//! One-card lookahead: how likely each ranking category is after the next card.
//!
//! The estimate is brute force. Every candidate card is appended to the hand,
//! the result is classified, and category counts are normalised by the number
//! of candidates evaluated. With the `parallel` feature the candidates are
//! evaluated on the rayon pool; only the aggregate counts matter, so both paths
//! produce the same map.

use std::collections::BTreeMap;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::ranking_engine::error::Result;
use crate::ranking_engine::evaluator::classify_hand;
use crate::ranking_engine::models::{Card, HandCategory, BOARD_SIZE, HOLE_SIZE};

/// Estimator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Hand size at which no more cards can come. A hand this size gets a
    /// degenerate distribution without simulation. `None` always simulates.
    pub complete_hand_size: Option<usize>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig { complete_hand_size: Some(BOARD_SIZE + HOLE_SIZE) }
    }
}

/// Probability of each ranking category; every category is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMap(BTreeMap<HandCategory, f64>);

impl ProbabilityMap {
    /// All categories at 0 except `category` at 1.
    pub fn certain(category: HandCategory) -> Self {
        ProbabilityMap(
            HandCategory::all()
                .map(|c| (c, if c == category { 1.0 } else { 0.0 }))
                .collect(),
        )
    }

    fn from_counts(counts: &BTreeMap<HandCategory, usize>, total: usize) -> Self {
        ProbabilityMap(
            HandCategory::all()
                .map(|c| {
                    let count = counts.get(&c).copied().unwrap_or(0);
                    (c, count as f64 / total as f64)
                })
                .collect(),
        )
    }

    pub fn get(&self, category: HandCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Sum of all probabilities; 1 within rounding for any real estimate.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// The most probable category; the stronger one wins a tie.
    pub fn most_likely(&self) -> HandCategory {
        self.0
            .iter()
            .fold((HandCategory::HighCard, f64::MIN), |best, (&c, &p)| {
                if p >= best.1 { (c, p) } else { best }
            })
            .0
    }

    /// Categories weakest first with their probabilities.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (HandCategory, f64)> + '_ {
        self.0.iter().map(|(&c, &p)| (c, p))
    }
}

/// Estimate category probabilities after one more card, with default settings.
pub fn estimate_next_card_probabilities(cards: &[Card], remaining: &[Card]) -> Result<ProbabilityMap> {
    estimate_with_config(cards, remaining, &EstimatorConfig::default())
}

/// Estimate category probabilities after one card from `remaining` is added.
///
/// Candidates already in `cards` are skipped. If the hand is complete or no
/// candidate is left, the current category is returned with certainty.
pub fn estimate_with_config(
    cards: &[Card],
    remaining: &[Card],
    config: &EstimatorConfig,
) -> Result<ProbabilityMap> {
    let current = classify_hand(cards)?.category;

    if config.complete_hand_size == Some(cards.len()) {
        debug!("hand of {} cards is complete, {} is certain", cards.len(), current);
        return Ok(ProbabilityMap::certain(current));
    }

    let candidates: Vec<Card> = remaining
        .iter()
        .copied()
        .filter(|card| !cards.contains(card))
        .collect();
    if candidates.len() < remaining.len() {
        warn!(
            "skipped {} candidate cards already in the hand",
            remaining.len() - candidates.len()
        );
    }
    if candidates.is_empty() {
        debug!("no candidate cards left, {} is certain", current);
        return Ok(ProbabilityMap::certain(current));
    }

    let counts = tally(cards, &candidates)?;
    let map = ProbabilityMap::from_counts(&counts, candidates.len());
    debug!(
        "simulated {} next cards from {} held, most likely {}",
        candidates.len(),
        cards.len(),
        map.most_likely()
    );
    Ok(map)
}

/// Category of `cards` plus one extra card.
fn next_category(cards: &[Card], extra: Card) -> Result<HandCategory> {
    let mut hand = Vec::with_capacity(cards.len() + 1);
    hand.extend_from_slice(cards);
    hand.push(extra);
    let category = classify_hand(&hand)?.category;
    trace!("next card {} makes {}", extra, category);
    Ok(category)
}

#[cfg(not(feature = "parallel"))]
fn tally(cards: &[Card], candidates: &[Card]) -> Result<BTreeMap<HandCategory, usize>> {
    let mut counts = BTreeMap::new();
    for &card in candidates {
        *counts.entry(next_category(cards, card)?).or_insert(0) += 1;
    }
    Ok(counts)
}

#[cfg(feature = "parallel")]
fn tally(cards: &[Card], candidates: &[Card]) -> Result<BTreeMap<HandCategory, usize>> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|&card| next_category(cards, card))
        .try_fold(BTreeMap::new, |mut counts, category| -> Result<BTreeMap<HandCategory, usize>> {
            *counts.entry(category?).or_insert(0) += 1;
            Ok(counts)
        })
        .try_reduce(BTreeMap::new, |mut a, b| {
            for (category, n) in b {
                *a.entry(category).or_insert(0) += n;
            }
            Ok(a)
        })
}
