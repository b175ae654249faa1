// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handlog Poker core types.
//!
//! Pure functions to encode a hand actions and to compute the players winnings
//! for a 6 players no-limit hold'em table, see [encode] and [calculate].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub mod encoder;
pub mod hand;
pub mod poker;
pub mod strength;
pub mod winnings;

pub use action::{Action, ActionKind};
pub use encoder::encode;
pub use hand::HandRecord;
pub use poker::{Chips, HoleCards, Round, Seat, TableConfig};
pub use winnings::{Outcome, Settlement, Winnings, calculate};
