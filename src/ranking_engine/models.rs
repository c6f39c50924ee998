use std::fmt;
use serde::{Deserialize, Serialize};

use crate::ranking_engine::error::{EngineError, Result};

/// Community cards dealt per hand.
pub const BOARD_SIZE: usize = 5;
/// Private cards dealt per hand.
pub const HOLE_SIZE: usize = 2;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs    => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts   => "Hearts",
            Suit::Spades   => "Spades",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::suits().find(|s| s.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Card rank, lowest to highest. The discriminant is the rank's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Ordinal value 0..=12 used for every numeric comparison.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two   => "2",
            Rank::Three => "3",
            Rank::Four  => "4",
            Rank::Five  => "5",
            Rank::Six   => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine  => "9",
            Rank::Ten   => "10",
            Rank::Jack  => "Jack",
            Rank::Queen => "Queen",
            Rank::King  => "King",
            Rank::Ace   => "Ace",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ranks().find(|r| r.symbol() == symbol)
    }

    /// Plural label used in hand names ("Kings", "2s").
    pub fn plural(self) -> String {
        format!("{}s", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card.
///
/// Fields are private so the value always matches the rank; read them through
/// the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Build a card from its textual rank and suit ("Queen", "Hearts").
    pub fn parse(rank: &str, suit: &str) -> Result<Self> {
        match (Rank::from_symbol(rank), Suit::from_name(suit)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(EngineError::InvalidCard {
                rank: rank.to_string(),
                suit: suit.to_string(),
            }),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Hand categories
// ---------------------------------------------------------------------------

/// Ranking categories, weakest first, so `Ord` follows hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    #[serde(rename = "High Card")]
    HighCard,
    #[serde(rename = "Pair")]
    Pair,
    #[serde(rename = "Two Pair")]
    TwoPair,
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    #[serde(rename = "Straight")]
    Straight,
    #[serde(rename = "Flush")]
    Flush,
    #[serde(rename = "Full House")]
    FullHouse,
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl HandCategory {
    /// Every category, weakest first.
    pub fn all() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard, Pair, TwoPair, ThreeOfAKind, Straight,
            Flush, FullHouse, FourOfAKind, StraightFlush, RoyalFlush,
        ]
        .into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard      => "High Card",
            HandCategory::Pair          => "Pair",
            HandCategory::TwoPair       => "Two Pair",
            HandCategory::ThreeOfAKind  => "Three of a Kind",
            HandCategory::Straight      => "Straight",
            HandCategory::Flush         => "Flush",
            HandCategory::FullHouse     => "Full House",
            HandCategory::FourOfAKind   => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush    => "Royal Flush",
        }
    }

    pub fn from_name(name: &str) -> Option<HandCategory> {
        HandCategory::all().find(|c| c.name() == name)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
