// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stored hand records.
use serde::{Deserialize, Serialize};

use crate::{
    poker::{Chips, HoleCards},
    winnings::Winnings,
};

/// A recorded hand with its computed winnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    /// The storage row id.
    pub id: i64,
    /// The unique hand identifier.
    pub hand_id: String,
    /// The starting stack of every player.
    pub stack_size: Chips,
    /// The dealer seat number.
    pub dealer_position: u8,
    /// The small blind seat number.
    pub small_blind_position: u8,
    /// The big blind seat number.
    pub big_blind_position: u8,
    /// The players hole cards.
    pub player_cards: HoleCards,
    /// The encoded actions.
    pub actions: String,
    /// The board cards if any were dealt.
    pub board_cards: Option<String>,
    /// The net winnings by seat.
    pub winnings: Winnings,
    /// The time this record was stored.
    pub created_at: String,
}

impl HandRecord {
    /// Formats this hand as history lines for display.
    pub fn history_lines(&self) -> Vec<String> {
        let hands = self
            .player_cards
            .iter()
            .map(|(player, cards)| format!("Player {player}: {cards}"))
            .collect::<Vec<_>>()
            .join("; ");

        let winnings = self
            .winnings
            .iter()
            .map(|(seat, chips)| {
                let sign = if chips > Chips::ZERO { "+" } else { "" };
                format!("Player {seat}: {sign}{chips}")
            })
            .collect::<Vec<_>>()
            .join("; ");

        vec![
            format!("Hand #{}", self.hand_id),
            format!(
                "Stack {}; Dealer: Player {}; Player {} Small blind; Player {} Big blind",
                self.stack_size,
                self.dealer_position,
                self.small_blind_position,
                self.big_blind_position
            ),
            format!("Hands: {hands}").trim_end().to_string(),
            format!("Actions: {}", self.actions),
            format!("Winnings: {winnings}"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_lines() {
        let record = HandRecord {
            id: 1,
            hand_id: "39b5999a".to_string(),
            stack_size: Chips::new(10_000),
            dealer_position: 3,
            small_blind_position: 4,
            big_blind_position: 5,
            player_cards: [(2, "5d4c"), (1, "Tc2c")]
                .into_iter()
                .map(|(p, c)| (p, c.to_string()))
                .collect(),
            actions: "p6:f p3:r300 p4:c flop:3hKdQs".to_string(),
            board_cards: Some("3hKdQs".to_string()),
            winnings: serde_json::from_str(r#"{"3":340,"4":-300,"5":-40}"#).unwrap(),
            created_at: "2025-01-01 10:00:00".to_string(),
        };

        assert_eq!(
            record.history_lines(),
            vec![
                "Hand #39b5999a",
                "Stack 10000; Dealer: Player 3; Player 4 Small blind; Player 5 Big blind",
                "Hands: Player 1: Tc2c; Player 2: 5d4c",
                "Actions: p6:f p3:r300 p4:c flop:3hKdQs",
                "Winnings: Player 1: 0; Player 2: 0; Player 3: +340; Player 4: -300; \
                 Player 5: -40; Player 6: 0",
            ]
        );
    }

    #[test]
    fn history_without_cards() {
        let record = HandRecord {
            id: 2,
            hand_id: "h2".to_string(),
            stack_size: Chips::new(500),
            dealer_position: 1,
            small_blind_position: 2,
            big_blind_position: 3,
            player_cards: HoleCards::default(),
            actions: String::new(),
            board_cards: None,
            winnings: Winnings::default(),
            created_at: String::new(),
        };

        let lines = record.history_lines();
        assert_eq!(lines[2], "Hands:");
        assert_eq!(lines[3], "Actions: ");
    }
}
