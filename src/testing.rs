//! Fixture key domains shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation. The impls are
//! hand-written so the fixtures work without the `derive` feature.

#![doc(hidden)]

use std::fmt;

use crate::domain::KeyDomain;

/// Three-value domain used by most examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Position in `Color::all()`.
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl KeyDomain for Color {
    fn all() -> Vec<Self> {
        vec![Color::Red, Color::Green, Color::Blue]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl KeyDomain for Suit {
    fn all() -> Vec<Self> {
        vec![Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    }
}

/// Card rank, `2..=14` with aces high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rank(u8);

impl Rank {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl KeyDomain for Rank {
    fn all() -> Vec<Self> {
        (2..=14).map(Rank).collect()
    }

    fn cardinality() -> usize {
        13
    }
}

/// A 52-key domain, large enough to be worth benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl KeyDomain for Card {
    fn all() -> Vec<Self> {
        <(Suit, Rank)>::all()
            .into_iter()
            .map(|(suit, rank)| Card { suit, rank })
            .collect()
    }

    fn cardinality() -> usize {
        52
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank.get() {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            n => n.to_string(),
        };
        let suit = match self.suit {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{}{}", rank, suit)
    }
}
