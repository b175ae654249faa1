// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database types for persisting hands.
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};
use std::{path::Path, sync::Arc};

use handlog_core::{Chips, HandRecord, HoleCards, Winnings};

/// A hand to insert in the database.
#[derive(Debug, Clone)]
pub struct NewHand {
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
    /// The board cards.
    pub board_cards: Option<String>,
    /// The computed winnings.
    pub winnings: Winnings,
}

/// Database for persisting hands.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

const SELECT_HAND: &str = "SELECT id, hand_id, stack_size, dealer_position,
       small_blind_position, big_blind_position, player_cards,
       actions, board_cards, winnings, created_at
     FROM hands";

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Open an in memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Create tables
        conn.execute(
            "CREATE TABLE IF NOT EXISTS hands (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               hand_id TEXT UNIQUE NOT NULL,
               stack_size INTEGER NOT NULL,
               dealer_position INTEGER NOT NULL,
               small_blind_position INTEGER NOT NULL,
               big_blind_position INTEGER NOT NULL,
               player_cards TEXT NOT NULL,
               actions TEXT NOT NULL,
               board_cards TEXT,
               winnings TEXT NOT NULL,
               created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Inserts a hand, returns None if a hand with the same id exists.
    pub async fn create(&self, hand: NewHand) -> Result<Option<HandRecord>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let inserted = db.execute(
                "INSERT OR IGNORE INTO hands (
                   hand_id, stack_size, dealer_position,
                   small_blind_position, big_blind_position,
                   player_cards, actions, board_cards, winnings
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    hand.hand_id,
                    hand.stack_size.amount(),
                    hand.dealer_position,
                    hand.small_blind_position,
                    hand.big_blind_position,
                    serde_json::to_string(&hand.player_cards)?,
                    hand.actions,
                    hand.board_cards,
                    serde_json::to_string(&hand.winnings)?,
                ],
            )?;

            if inserted == 0 {
                return Ok(None);
            }

            let id = db.last_insert_rowid();
            let mut stmt = db.prepare(&format!("{SELECT_HAND} WHERE id = ?1"))?;
            let hand = stmt.query_row(params![id], hand_from_row)?;

            Ok(Some(hand))
        })
        .await?
    }

    /// Gets a hand by its identifier.
    pub async fn get(&self, hand_id: &str) -> Result<Option<HandRecord>> {
        let db = self.db.clone();
        let hand_id = hand_id.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(&format!("{SELECT_HAND} WHERE hand_id = ?1"))?;
            let hand = stmt
                .query_row(params![hand_id], hand_from_row)
                .optional()?;

            Ok(hand)
        })
        .await?
    }

    /// Gets the most recent hands, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<HandRecord>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(&format!(
                "{SELECT_HAND} ORDER BY created_at DESC, id DESC LIMIT ?1"
            ))?;
            let hands = stmt
                .query_map(params![limit], hand_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(hands)
        })
        .await?
    }

    /// Deletes a hand, returns false if the hand doesn't exist.
    pub async fn delete(&self, hand_id: &str) -> Result<bool> {
        let db = self.db.clone();
        let hand_id = hand_id.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();
            let deleted = db.execute("DELETE FROM hands WHERE hand_id = ?1", params![hand_id])?;
            Ok(deleted > 0)
        })
        .await?
    }

    /// Checks if a hand exists.
    pub async fn exists(&self, hand_id: &str) -> Result<bool> {
        let db = self.db.clone();
        let hand_id = hand_id.to_string();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();
            let exists = db.query_row(
                "SELECT EXISTS(SELECT 1 FROM hands WHERE hand_id = ?1)",
                params![hand_id],
                |row| row.get::<usize, bool>(0),
            )?;
            Ok(exists)
        })
        .await?
    }

    /// Checks the database connection.
    pub async fn ping(&self) -> Result<()> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();
            db.query_row("SELECT 1", (), |row| row.get::<usize, i64>(0))?;
            Ok(())
        })
        .await?
    }
}

fn hand_from_row(row: &Row<'_>) -> rusqlite::Result<HandRecord> {
    Ok(HandRecord {
        id: row.get(0)?,
        hand_id: row.get(1)?,
        stack_size: Chips::new(row.get(2)?),
        dealer_position: row.get(3)?,
        small_blind_position: row.get(4)?,
        big_blind_position: row.get(5)?,
        player_cards: json_column(row, 6)?,
        actions: row.get(7)?,
        board_cards: row.get(8)?,
        winnings: json_column(row, 9)?,
        created_at: row.get(10)?,
    })
}

fn json_column<T: serde::de::DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text = row.get::<usize, String>(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_hand(hand_id: &str) -> NewHand {
        NewHand {
            hand_id: hand_id.to_string(),
            stack_size: Chips::new(10_000),
            dealer_position: 3,
            small_blind_position: 4,
            big_blind_position: 5,
            player_cards: [(1, "Tc2c"), (4, "QcTd")]
                .into_iter()
                .map(|(p, c)| (p, c.to_string()))
                .collect(),
            actions: "p4:c p5:x".to_string(),
            board_cards: None,
            winnings: Winnings::default(),
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let db = Db::open_in_memory().unwrap();

        let hand = db.create(new_hand("h1")).await.unwrap().unwrap();
        assert_eq!(hand.hand_id, "h1");
        assert_eq!(hand.stack_size, Chips::new(10_000));
        assert_eq!(hand.actions, "p4:c p5:x");
        assert_eq!(hand.player_cards.get(&4).map(String::as_str), Some("QcTd"));
        assert!(!hand.created_at.is_empty());

        let stored = db.get("h1").await.unwrap().unwrap();
        assert_eq!(stored, hand);

        assert!(db.get("h2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_duplicate() {
        let db = Db::open_in_memory().unwrap();

        assert!(db.create(new_hand("h1")).await.unwrap().is_some());
        assert!(db.create(new_hand("h1")).await.unwrap().is_none());
        assert!(db.exists("h1").await.unwrap());
        assert!(!db.exists("h2").await.unwrap());
    }

    #[tokio::test]
    async fn recent_hands() {
        let db = Db::open_in_memory().unwrap();

        for id in ["h1", "h2", "h3"] {
            db.create(new_hand(id)).await.unwrap();
        }

        let hands = db.recent(2).await.unwrap();
        let ids = hands.iter().map(|h| h.hand_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["h3", "h2"]);
    }

    #[tokio::test]
    async fn delete_hand() {
        let db = Db::open_in_memory().unwrap();
        db.create(new_hand("h1")).await.unwrap();

        assert!(db.delete("h1").await.unwrap());
        assert!(!db.delete("h1").await.unwrap());
        assert!(!db.exists("h1").await.unwrap());
    }

    #[tokio::test]
    async fn ping() {
        let db = Db::open_in_memory().unwrap();
        assert!(db.ping().await.is_ok());
    }
}
