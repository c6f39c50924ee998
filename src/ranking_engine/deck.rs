use rand::Rng;
use crate::ranking_engine::error::{EngineError, Result};
use crate::ranking_engine::models::{Card, Rank, Suit};

/// A standard 52-card deck that can be reset, shuffled and drawn from.
///
/// The deck never owns a random source: callers pass one to [`Deck::shuffle`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Build a full, ordered deck.
    pub fn new() -> Self {
        let mut deck = Deck { cards: Vec::with_capacity(Self::SIZE) };
        deck.reset();
        deck
    }

    /// Build a full deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Restore all 52 cards in suit-major, rank-minor order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(
            Suit::suits().flat_map(|suit| Rank::ranks().map(move |rank| Card::new(rank, suit))),
        );
    }

    /// Permute the remaining cards uniformly at random.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        // Fisher-Yates shuffle
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the top card (the end of the current order).
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Draw `n` cards at once; fails without drawing if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(EngineError::EmptyDeck);
        }
        (0..n).map(|_| self.draw()).collect()
    }

    /// Remaining cards, bottom of the deck first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn sorted_keys(cards: &[Card]) -> Vec<(u8, u8)> {
        let mut keys: Vec<_> = cards.iter().map(|c| (c.value(), c.suit() as u8)).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn reset_builds_52_unique_cards_in_canonical_order() {
        let deck = Deck::new();
        assert_eq!(deck.len(), Deck::SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), Deck::SIZE);

        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn reset_after_draws_restores_full_deck() {
        let mut deck = Deck::new();
        deck.draw_n(10).unwrap();
        assert_eq!(deck.len(), 42);
        deck.reset();
        assert_eq!(deck.cards(), Deck::new().cards());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let before = sorted_keys(deck.cards());
        deck.shuffle(&mut rng);
        assert_eq!(sorted_keys(deck.cards()), before);
        assert_ne!(deck.cards(), Deck::new().cards());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| Deck::new_shuffled(&mut StdRng::seed_from_u64(seed)).cards().to_vec();
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn draws_follow_permuted_order_then_run_dry() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new_shuffled(&mut rng);
        let expected: Vec<Card> = deck.cards().iter().rev().copied().collect();

        let drawn: Vec<Card> = (0..Deck::SIZE).map(|_| deck.draw().unwrap()).collect();
        assert_eq!(drawn, expected);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck));
    }

    #[test]
    fn draw_n_refuses_to_overdraw() {
        let mut deck = Deck::new();
        deck.draw_n(50).unwrap();
        assert_eq!(deck.draw_n(3), Err(EngineError::EmptyDeck));
        assert_eq!(deck.len(), 2);
    }
}
