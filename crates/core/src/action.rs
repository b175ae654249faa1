// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting actions recorded in a hand history.
use serde::{Deserialize, Serialize};

use crate::poker::{Chips, Round, Seat};

/// A player action kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Player folds.
    Fold,
    /// Player checks.
    Check,
    /// Player calls the highest bet in the round.
    Call,
    /// Player bets an amount on top of its round bet.
    Bet,
    /// Player raises its round bet to an amount.
    Raise,
    /// Player goes all in.
    Allin,
    /// Board cards are dealt.
    Deal,
    /// Any other action, ignored.
    #[serde(other)]
    Unknown,
}

impl ActionKind {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::Allin => "allin",
            ActionKind::Deal => "deal",
            ActionKind::Unknown => "unknown",
        }
    }
}

/// A betting or dealing event in a hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The round this action belongs to.
    #[serde(default)]
    pub round: Round,
    /// The acting player number, absent for board deals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<u8>,
    /// The action kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,
    /// The action amount, its meaning depends on the action kind.
    #[serde(default)]
    pub amount: u32,
    /// The dealt cards for deal actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<String>,
}

impl Action {
    /// Creates a player action.
    pub fn new(round: Round, player: u8, kind: ActionKind, amount: u32) -> Self {
        Self {
            round,
            player: Some(player),
            action: Some(kind),
            amount,
            cards: None,
        }
    }

    /// Creates a board deal action.
    pub fn deal(round: Round, cards: &str) -> Self {
        Self {
            round,
            player: None,
            action: Some(ActionKind::Deal),
            amount: 0,
            cards: Some(cards.to_string()),
        }
    }

    /// The seat of the acting player if the player number is valid.
    pub fn seat(&self) -> Option<Seat> {
        self.player.and_then(Seat::new)
    }

    /// The action amount as chips.
    pub fn chips(&self) -> Chips {
        Chips::from(self.amount)
    }

    /// Checks if this action deals board cards.
    pub fn is_deal(&self) -> bool {
        matches!(self.action, Some(ActionKind::Deal)) || self.cards.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_actions() {
        let json = r#"[
            {"round": "preflop", "player": 3, "action": "raise", "amount": 300},
            {"round": "flop", "cards": "3hKdQs"},
            {"player": 4, "action": "check"},
            {"round": "turn", "player": 2, "action": "muck"}
        ]"#;

        let actions: Vec<Action> = serde_json::from_str(json).unwrap();
        assert_eq!(
            actions[0],
            Action::new(Round::Preflop, 3, ActionKind::Raise, 300)
        );

        assert_eq!(actions[1].round, Round::Flop);
        assert_eq!(actions[1].action, None);
        assert!(actions[1].is_deal());

        // Missing round defaults to preflop.
        assert_eq!(actions[2].round, Round::Preflop);
        assert_eq!(actions[2].amount, 0);

        // Unrecognized kinds are kept as unknown.
        assert_eq!(actions[3].action, Some(ActionKind::Unknown));
    }

    #[test]
    fn action_seat() {
        let action = Action::new(Round::Preflop, 6, ActionKind::Fold, 0);
        assert_eq!(action.seat(), Seat::new(6));

        let action = Action::new(Round::Preflop, 9, ActionKind::Fold, 0);
        assert_eq!(action.seat(), None);

        assert_eq!(Action::deal(Round::Flop, "3hKdQs").seat(), None);
    }
}
