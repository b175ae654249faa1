// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Compact text encoding of a hand actions.
//!
//! Each action becomes a token and tokens are separated by a single space:
//!
//! ```
//! # use handlog_core::{encode, Action, ActionKind, Round};
//! let actions = [
//!     Action::new(Round::Preflop, 3, ActionKind::Raise, 300),
//!     Action::new(Round::Preflop, 4, ActionKind::Call, 0),
//!     Action::deal(Round::Flop, "3hKdQs"),
//!     Action::new(Round::Flop, 4, ActionKind::Check, 0),
//! ];
//! assert_eq!(encode(&actions), "p3:r300 p4:c flop:3hKdQs p4:x");
//! ```
use crate::action::{Action, ActionKind};

/// Encodes a list of actions, actions that cannot be encoded are skipped.
pub fn encode(actions: &[Action]) -> String {
    actions
        .iter()
        .filter_map(token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn token(action: &Action) -> Option<String> {
    if action.is_deal() {
        return match &action.cards {
            Some(cards) if action.round.is_postflop() && !cards.is_empty() => {
                Some(format!("{}:{cards}", action.round))
            }
            _ => None,
        };
    }

    let player = action.player?;
    let code = match action.action? {
        ActionKind::Fold => "f".to_string(),
        ActionKind::Check => "x".to_string(),
        ActionKind::Call => "c".to_string(),
        ActionKind::Bet => format!("b{}", action.amount),
        ActionKind::Raise => format!("r{}", action.amount),
        ActionKind::Allin => "allin".to_string(),
        ActionKind::Deal | ActionKind::Unknown => return None,
    };

    Some(format!("p{player}:{code}"))
}
