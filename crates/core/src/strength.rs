// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simplified showdown hand strength.
//!
//! Hands are classified only by repeated ranks, flushes and straights are not
//! detected so a flush loses to a pair and a straight ranks as high card. This
//! ladder is intentionally not a real Poker hand ranking.
use handlog_cards::{Card, parse_cards};

use crate::poker::{HoleCards, Seat};

/// Coarse hand category, higher is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No repeated rank.
    HighCard = 0,
    /// One rank appears twice.
    OnePair = 1,
    /// Two ranks appear twice.
    TwoPair = 2,
    /// One rank appears three times and no rank appears twice.
    Trips = 3,
    /// One rank appears three times and another twice.
    FullHouse = 6,
    /// One rank appears four times.
    Quads = 7,
}

/// A hand strength made of a category and a tie-break key.
///
/// Strengths compare by category first and then lexicographically by key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandStrength {
    category: Category,
    key: Vec<u8>,
}

impl HandStrength {
    /// Evaluates the strength of a set of cards.
    pub fn eval(cards: &[Card]) -> Self {
        // Count cards by rank value.
        let mut counts = [0usize; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let has_count = |n: usize| counts.contains(&n);
        let pairs = counts.iter().filter(|&&c| c == 2).count();

        let category = if has_count(4) {
            Category::Quads
        } else if has_count(3) && has_count(2) {
            Category::FullHouse
        } else if has_count(3) {
            Category::Trips
        } else if pairs >= 2 {
            Category::TwoPair
        } else if pairs == 1 {
            Category::OnePair
        } else {
            Category::HighCard
        };

        // Distinct ranks, most repeated first then highest first.
        let mut ranks = (2..=14u8)
            .filter(|&r| counts[r as usize] > 0)
            .collect::<Vec<_>>();
        ranks.sort_by(|a, b| {
            counts[*b as usize]
                .cmp(&counts[*a as usize])
                .then_with(|| b.cmp(a))
        });

        if category == Category::HighCard {
            ranks.truncate(5);
        }

        Self {
            category,
            key: ranks,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tie-break ranks.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

/// Picks the showdown winner amongst the given seats.
///
/// Returns None if the board has less than 5 cards, if any card cannot be
/// parsed, or if no seat has hole cards. Seats with missing or short hole cards
/// are excluded, and on equal strength the first seat wins.
pub fn showdown_winner(seats: &[Seat], hole_cards: &HoleCards, board: Option<&str>) -> Option<Seat> {
    let board = parse_cards(board?.get(0..10)?).ok()?;

    let mut winner: Option<(Seat, HandStrength)> = None;
    for &seat in seats {
        let Some(hole) = hole_cards.get(&seat.number()) else {
            continue;
        };

        if hole.chars().count() < 4 {
            continue;
        }

        let mut cards = parse_cards(hole.get(0..4)?).ok()?;
        cards.extend_from_slice(&board);

        let strength = HandStrength::eval(&cards);
        if winner.as_ref().is_none_or(|(_, best)| strength > *best) {
            winner = Some((seat, strength));
        }
    }

    winner.map(|(seat, _)| seat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(cards: &str) -> HandStrength {
        HandStrength::eval(&parse_cards(cards).unwrap())
    }

    fn seats(numbers: &[u8]) -> Vec<Seat> {
        numbers.iter().filter_map(|&n| Seat::new(n)).collect()
    }

    fn hole_cards(cards: &[(u8, &str)]) -> HoleCards {
        cards.iter().map(|(p, c)| (*p, c.to_string())).collect()
    }

    #[test]
    fn categories() {
        assert_eq!(strength("AsAdAhAc2d3c9h").category(), Category::Quads);
        assert_eq!(strength("KsKdKh2c2d7c9h").category(), Category::FullHouse);
        assert_eq!(strength("KsKdKh2c4d7c9h").category(), Category::Trips);
        assert_eq!(strength("KsKd2h2c4d7c9h").category(), Category::TwoPair);
        assert_eq!(strength("KsKd2h2c4d4c9h").category(), Category::TwoPair);
        assert_eq!(strength("KsKd2h3c4d7c9h").category(), Category::OnePair);
        assert_eq!(strength("KsQd2h3c4d7c9h").category(), Category::HighCard);

        // Two sets of trips have no pair.
        assert_eq!(strength("KsKdKh2c2d2h9h").category(), Category::Trips);
    }

    #[test]
    fn flushes_and_straights_are_not_ranked() {
        // A seven high flush is high card.
        let flush = strength("2h4h5h6h7hKcJd");
        assert_eq!(flush.category(), Category::HighCard);

        // A straight is high card too.
        let straight = strength("9c8dThJsQc2h3d");
        assert_eq!(straight.category(), Category::HighCard);

        // And both lose to a pair of deuces.
        let pair = strength("2c2d5h6h7hKcJd");
        assert!(pair > flush);
        assert!(pair > straight);
    }

    #[test]
    fn tie_break_keys() {
        let full_house = strength("2s2d2hKcKd7c9h");
        assert_eq!(full_house.key(), &[2, 13, 9, 7]);

        let high_card = strength("KsQd2h3c4d7c9h");
        assert_eq!(high_card.key(), &[13, 12, 9, 7, 4]);

        let pair = strength("KsKd2h3c4d7c9h");
        assert_eq!(pair.key(), &[13, 9, 7, 4, 3, 2]);

        // Same category is decided by the key.
        assert!(strength("AsAd2h3c4d7c9h") > pair);
        assert!(strength("KsKd2h3c4d7cTh") > pair);
    }

    #[test]
    fn winner_needs_full_board() {
        let cards = hole_cards(&[(4, "AsAd"), (5, "2c7h")]);
        let active = seats(&[4, 5]);

        assert_eq!(showdown_winner(&active, &cards, None), None);
        assert_eq!(showdown_winner(&active, &cards, Some("")), None);
        assert_eq!(showdown_winner(&active, &cards, Some("3hKdQs8c")), None);
        assert_eq!(
            showdown_winner(&active, &cards, Some("3hKdQs8c9d")),
            Seat::new(4)
        );
    }

    #[test]
    fn winner_skips_short_hole_cards() {
        let cards = hole_cards(&[(3, "As"), (4, "2c7h")]);
        let active = seats(&[2, 3, 4]);

        // Seat 2 has no cards and seat 3 has one card.
        assert_eq!(
            showdown_winner(&active, &cards, Some("3hKdQs8c9d")),
            Seat::new(4)
        );

        let cards = hole_cards(&[(3, "As")]);
        assert_eq!(showdown_winner(&active, &cards, Some("3hKdQs8c9d")), None);
    }

    #[test]
    fn winner_parse_failure() {
        let cards = hole_cards(&[(4, "AsAd"), (5, "2c7x")]);
        let active = seats(&[4, 5]);
        assert_eq!(showdown_winner(&active, &cards, Some("3hKdQs8c9d")), None);

        let cards = hole_cards(&[(4, "AsAd"), (5, "2c7h")]);
        assert_eq!(showdown_winner(&active, &cards, Some("3hKdQs8c9z")), None);
    }

    #[test]
    fn first_seat_wins_ties() {
        // Both play the board.
        let cards = hole_cards(&[(2, "2c3d"), (5, "2h3s")]);
        let active = seats(&[2, 5]);
        assert_eq!(
            showdown_winner(&active, &cards, Some("AsKdQhJc9d")),
            Seat::new(2)
        );

        let active = seats(&[5, 2]);
        assert_eq!(
            showdown_winner(&active, &cards, Some("AsKdQhJc9d")),
            Seat::new(5)
        );
    }
}
