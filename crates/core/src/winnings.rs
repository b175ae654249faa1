// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand winnings calculation.
//!
//! The calculator replays a hand actions tracking each player contribution to the
//! pot and then pays the pot to the last player standing, to the showdown winner,
//! or splits it evenly when a winner cannot be determined.
//!
//! ```
//! # use handlog_core::*;
//! let actions = [
//!     Action::new(Round::Preflop, 6, ActionKind::Raise, 100),
//!     Action::new(Round::Preflop, 1, ActionKind::Fold, 0),
//!     Action::new(Round::Preflop, 2, ActionKind::Fold, 0),
//!     Action::new(Round::Preflop, 3, ActionKind::Fold, 0),
//!     Action::new(Round::Preflop, 4, ActionKind::Fold, 0),
//!     Action::new(Round::Preflop, 5, ActionKind::Fold, 0),
//! ];
//!
//! let settlement = calculate(
//!     &TableConfig::default(),
//!     Chips::new(10_000),
//!     &HoleCards::default(),
//!     &actions,
//!     None,
//! );
//!
//! assert_eq!(settlement.pot, Chips::new(160));
//! assert_eq!(settlement.winnings.get(Seat::new(6).unwrap()), Chips::new(60));
//! assert!(settlement.is_zero_sum());
//! ```
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    action::{Action, ActionKind},
    poker::{Chips, HoleCards, Round, Seat, TableConfig},
    strength,
};

/// Net chips won or lost by each seat in a hand.
///
/// Serialized as a map from player number to amount, i.e. `{"1": -40, "2": 40}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<u8, Chips>", into = "BTreeMap<u8, Chips>")]
pub struct Winnings([Chips; Seat::COUNT]);

impl Winnings {
    /// The amount for a seat.
    pub fn get(&self, seat: Seat) -> Chips {
        self.0[seat.index()]
    }

    /// Iterates seats and amounts in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, Chips)> + '_ {
        Seat::all().map(|seat| (seat, self.get(seat)))
    }

    /// The sum of all seats amounts, zero when the pot has been paid.
    pub fn total(&self) -> Chips {
        self.0.iter().copied().sum()
    }

    fn add(&mut self, seat: Seat, chips: Chips) {
        self.0[seat.index()] += chips;
    }
}

impl From<BTreeMap<u8, Chips>> for Winnings {
    fn from(map: BTreeMap<u8, Chips>) -> Self {
        let mut winnings = Winnings::default();
        for (number, chips) in map {
            if let Some(seat) = Seat::new(number) {
                winnings.0[seat.index()] = chips;
            }
        }

        winnings
    }
}

impl From<Winnings> for BTreeMap<u8, Chips> {
    fn from(winnings: Winnings) -> Self {
        winnings
            .iter()
            .map(|(seat, chips)| (seat.number(), chips))
            .collect()
    }
}

/// How the pot was awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All other players folded.
    FoldWin {
        /// The last player standing.
        winner: Seat,
    },
    /// A single winner at showdown.
    Showdown {
        /// The seat with the best hand.
        winner: Seat,
    },
    /// No winner could be determined and the pot was split.
    Split {
        /// The seats that shared the pot.
        seats: Vec<Seat>,
    },
    /// No active player was left and the pot was not paid, in this case the
    /// winnings do not sum to zero.
    Unawarded,
}

/// The result of a winnings calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Net winnings for each seat.
    pub winnings: Winnings,
    /// The total chips in the pot.
    pub pot: Chips,
    /// How the pot was awarded.
    pub outcome: Outcome,
}

impl Settlement {
    /// Checks if the winnings sum to zero.
    pub fn is_zero_sum(&self) -> bool {
        self.winnings.total() == Chips::ZERO
    }
}

/// Computes each seat net winnings for a hand.
///
/// Malformed actions are skipped and a showdown that cannot be evaluated splits
/// the pot, so this function never fails.
pub fn calculate(
    config: &TableConfig,
    stack_size: Chips,
    hole_cards: &HoleCards,
    actions: &[Action],
    board_cards: Option<&str>,
) -> Settlement {
    let mut ledger = Ledger::new(config, stack_size);
    for action in actions {
        ledger.apply(action);
    }

    ledger.settle(hole_cards, board_cards)
}

/// Contributions state while replaying a hand.
#[derive(Debug)]
struct Ledger {
    stack_size: Chips,
    round: Round,
    contributions: [Chips; Seat::COUNT],
    round_bets: [Chips; Seat::COUNT],
    folded: AHashSet<Seat>,
}

impl Ledger {
    fn new(config: &TableConfig, stack_size: Chips) -> Self {
        // Blinds are always posted by the same seats.
        let mut contributions = [Chips::ZERO; Seat::COUNT];
        contributions[Seat::SMALL_BLIND.index()] = config.small_blind;
        contributions[Seat::BIG_BLIND.index()] = config.big_blind;

        Self {
            stack_size,
            round: Round::Preflop,
            contributions,
            round_bets: contributions,
            folded: AHashSet::default(),
        }
    }

    fn apply(&mut self, action: &Action) {
        // The first action of a new round only starts the round.
        if action.round != self.round && action.round.is_postflop() {
            self.round = action.round;
            self.round_bets = [Chips::ZERO; Seat::COUNT];
            return;
        }

        let (Some(seat), Some(kind)) = (action.seat(), action.action) else {
            return;
        };

        let idx = seat.index();
        match kind {
            ActionKind::Fold => {
                self.folded.insert(seat);
            }
            ActionKind::Call => {
                let max_bet = self.round_bets.iter().copied().max().unwrap_or_default();
                let call = max_bet - self.round_bets[idx];
                self.round_bets[idx] = max_bet;
                self.contributions[idx] += call;
            }
            ActionKind::Bet => {
                self.round_bets[idx] += action.chips();
                self.contributions[idx] += action.chips();
            }
            ActionKind::Raise => self.raise_to(idx, action.chips()),
            ActionKind::Allin if action.amount > 0 => self.raise_to(idx, action.chips()),
            ActionKind::Allin => {
                // Whatever is left of the starting stack across all rounds.
                let remaining = self.stack_size - self.contributions[idx];
                self.round_bets[idx] += remaining;
                self.contributions[idx] += remaining;
            }
            ActionKind::Check | ActionKind::Deal | ActionKind::Unknown => {}
        }
    }

    fn raise_to(&mut self, idx: usize, amount: Chips) {
        let delta = amount - self.round_bets[idx];
        self.round_bets[idx] = amount;
        self.contributions[idx] += delta;
    }

    fn settle(self, hole_cards: &HoleCards, board_cards: Option<&str>) -> Settlement {
        let pot = self.contributions.iter().copied().sum::<Chips>();

        let active = Seat::all()
            .filter(|seat| {
                !self.folded.contains(seat) && self.contributions[seat.index()] > Chips::ZERO
            })
            .collect::<Vec<_>>();

        let mut winnings = Winnings(self.contributions.map(|c| -c));

        let outcome = match active.len() {
            0 => Outcome::Unawarded,
            1 => {
                let winner = active[0];
                winnings.add(winner, pot);
                Outcome::FoldWin { winner }
            }
            _ => match strength::showdown_winner(&active, hole_cards, board_cards) {
                Some(winner) => {
                    winnings.add(winner, pot);
                    Outcome::Showdown { winner }
                }
                None => {
                    let count = active.len() as i64;
                    let share = pot / count;
                    let remainder = (pot % count).amount() as usize;
                    for (pos, seat) in active.iter().enumerate() {
                        let extra = if pos < remainder { 1 } else { 0 };
                        winnings.add(*seat, share + Chips::new(extra));
                    }

                    Outcome::Split { seats: active }
                }
            },
        };

        Settlement {
            winnings,
            pot,
            outcome,
        }
    }
}
