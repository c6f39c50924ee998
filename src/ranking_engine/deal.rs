use std::fmt;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::ranking_engine::{
    deck::Deck,
    error::Result,
    evaluator::{classify_hand, Classification},
    models::{Card, BOARD_SIZE, HOLE_SIZE},
    probability::{estimate_with_config, EstimatorConfig, ProbabilityMap},
};

/// Betting round, named by how many board cards are face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::PreFlop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::PreFlop => "Pre-Flop",
            Street::Flop    => "Flop",
            Street::Turn    => "Turn",
            Street::River   => "River",
        }
    }

    /// Board cards face up on this street.
    pub fn cards_shown(self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::Flop    => 3,
            Street::Turn    => 4,
            Street::River   => BOARD_SIZE,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How to seed the shuffle for a new deal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealRequest {
    /// `Some(seed)` reproduces the same deal every time; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl DealRequest {
    pub fn seeded(seed: u64) -> Self {
        DealRequest { rng_seed: Some(seed) }
    }
}

/// One hand: the board, the hole cards and the rest of the deck.
#[derive(Debug, Clone)]
pub struct Deal {
    board: Vec<Card>,
    hole: Vec<Card>,
    deck: Deck,
}

impl Deal {
    /// Shuffle a fresh deck and deal five board cards, then two hole cards.
    pub fn new(request: DealRequest) -> Result<Self> {
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::from_deck(Deck::new_shuffled(&mut rng))
    }

    /// Deal from a deck the caller already shuffled.
    pub fn from_deck(mut deck: Deck) -> Result<Self> {
        let board = deck.draw_n(BOARD_SIZE)?;
        let hole = deck.draw_n(HOLE_SIZE)?;
        debug!("dealt {} board and {} hole cards, {} left", board.len(), hole.len(), deck.len());
        Ok(Deal { board, hole, deck })
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Hole cards followed by the board cards face up on `street`.
    pub fn visible_cards(&self, street: Street) -> Vec<Card> {
        let mut cards = self.hole.clone();
        cards.extend_from_slice(&self.board[..street.cards_shown()]);
        cards
    }

    /// Every card the player cannot see: the deck plus face-down board cards.
    pub fn unseen_cards(&self, street: Street) -> Vec<Card> {
        let mut cards = self.deck.cards().to_vec();
        cards.extend_from_slice(&self.board[street.cards_shown()..]);
        cards
    }

    pub fn classify(&self, street: Street) -> Result<Classification> {
        classify_hand(&self.visible_cards(street))
    }

    pub fn next_card_probabilities(&self, street: Street, config: &EstimatorConfig) -> Result<ProbabilityMap> {
        estimate_with_config(&self.visible_cards(street), &self.unseen_cards(street), config)
    }
}
