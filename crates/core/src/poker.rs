// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker hand.
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, iter, ops};

pub use handlog_cards::{Card, Rank, Suit};

/// Players hole cards strings by player number, i.e. `{1: "Tc2c"}`.
pub type HoleCards = BTreeMap<u8, String>;

/// A seat at the 6 players table, numbered from 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The number of seats at the table.
    pub const COUNT: usize = 6;

    /// The seat that posts the small blind.
    pub const SMALL_BLIND: Seat = Seat(4);

    /// The seat that posts the big blind.
    pub const BIG_BLIND: Seat = Seat(5);

    /// Creates a seat from a player number, returns None if out of range.
    pub fn new(number: u8) -> Option<Seat> {
        (1..=Self::COUNT as u8).contains(&number).then_some(Seat(number))
    }

    /// Returns all seats in table order.
    pub fn all() -> impl DoubleEndedIterator<Item = Seat> + Clone {
        (1..=Self::COUNT as u8).map(Seat)
    }

    /// The player number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero based index of this seat.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chips amount.
///
/// Amounts are signed so that the same type can hold contributions and net
/// winnings. Arithmetic saturates at the `i64` bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(i64);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> i64 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val as i64)
    }
}

impl From<i64> for Chips {
    fn from(val: i64) -> Self {
        Chips(val)
    }
}

impl From<Chips> for i64 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Neg for Chips {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl ops::Mul<i64> for Chips {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl ops::Div<i64> for Chips {
    type Output = Self;

    /// Euclidean division so that `q * n + r` always gives back the amount.
    fn div(self, rhs: i64) -> Self::Output {
        Self(self.0.div_euclid(rhs))
    }
}

impl ops::Rem<i64> for Chips {
    type Output = Self;

    /// Euclidean remainder, always in `0..rhs`.
    fn rem(self, rhs: i64) -> Self::Output {
        Self(self.0.rem_euclid(rhs))
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A betting round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    /// Betting before the flop.
    #[default]
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the last board card.
    River,
}

impl Round {
    /// The round name as used in hand histories.
    pub fn label(&self) -> &'static str {
        match self {
            Round::Preflop => "preflop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
        }
    }

    /// Checks if this round comes after board cards are dealt.
    pub fn is_postflop(&self) -> bool {
        !matches!(self, Round::Preflop)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per deployment table settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The small blind posted by seat 4.
    pub small_blind: Chips,
    /// The big blind posted by seat 5.
    pub big_blind: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        }
    }
}
