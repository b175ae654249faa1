// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handlog Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handlog_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! and to parse cards from their two characters notation, a rank followed by a
//! suit, as used in hand histories:
//!
//! ```
//! # use handlog_cards::{Card, Rank, Suit, parse_cards};
//! let kd = "Kd".parse::<Card>().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//!
//! let board = parse_cards("3hKdQs").unwrap();
//! assert_eq!(board.len(), 3);
//! assert_eq!(board[2].rank().value(), 12);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};
