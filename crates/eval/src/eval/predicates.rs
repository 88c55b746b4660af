// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Predicates over a hand or its sorted rank values.
//!
//! All the rank predicates expect the ranks sorted in ascending order as
//! returned by [rank_values].
use crate::Card;

/// Returns the hand rank values (2..=14) sorted in ascending order.
pub fn rank_values<const N: usize>(hand: &[Card; N]) -> [u8; N] {
    let mut ranks = hand.map(|c| c.rank().value());
    ranks.sort_unstable();
    ranks
}

/// Checks if all cards share one suit.
pub fn is_flush(hand: &[Card]) -> bool {
    match hand.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit() == first.suit()),
        None => false,
    }
}

/// Checks if the sorted ranks form a run of consecutive values.
///
/// The ace is always high so A-2-3-4-5 is not a straight.
pub fn is_straight(ranks: &[u8]) -> bool {
    !ranks.is_empty() && ranks.windows(2).all(|w| w[0] + 1 == w[1])
}

/// Returns the lowest rank that appears at least `n` times and is not in
/// `excluding`, `None` if there is no such rank.
pub fn count_of_rank(n: usize, ranks: &[u8], excluding: &[u8]) -> Option<u8> {
    ranks
        .chunk_by(|a, b| a == b)
        .find(|group| group.len() >= n && !excluding.contains(&group[0]))
        .map(|group| group[0])
}

/// Returns the `(high, low)` pair ranks if the ranks contain two pairs.
pub fn two_pair(ranks: &[u8]) -> Option<(u8, u8)> {
    let mut pairs = ranks
        .chunk_by(|a, b| a == b)
        .filter(|group| group.len() >= 2)
        .map(|group| group[0]);

    let low = pairs.next()?;
    let high = pairs.last()?;
    Some((high, low))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerpoker_cards::parse_tokens;

    fn hand(s: &str) -> [Card; 5] {
        let cards = parse_tokens(s)
            .unwrap()
            .into_iter()
            .map(|t| t.card().unwrap())
            .collect::<Vec<_>>();
        cards.try_into().unwrap()
    }

    #[test]
    fn sorted_rank_values() {
        assert_eq!(rank_values(&hand("AS 2C TD 9H 2S")), [2, 2, 9, 10, 14]);
        assert_eq!(rank_values(&hand("KC QC JC TC 9C")), [9, 10, 11, 12, 13]);
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand("2C 5C 9C JC AC")));
        assert!(!is_flush(&hand("2C 5C 9C JC AS")));
        assert!(!is_flush(&[]));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&[6, 7, 8, 9, 10]));
        assert!(is_straight(&[10, 11, 12, 13, 14]));
        assert!(!is_straight(&[6, 7, 8, 9, 11]));
        assert!(!is_straight(&[6, 6, 7, 8, 9]));
        assert!(!is_straight(&[]));
    }

    #[test]
    fn wheel_is_not_a_straight() {
        // Aces are always high, the five-high wheel is a plain ace high.
        let ranks = rank_values(&hand("AC 2D 3H 4S 5C"));
        assert_eq!(ranks, [2, 3, 4, 5, 14]);
        assert!(!is_straight(&ranks));
    }

    #[test]
    fn kinds() {
        let ranks = [7, 7, 7, 7, 11];
        assert_eq!(count_of_rank(4, &ranks, &[]), Some(7));
        assert_eq!(count_of_rank(3, &ranks, &[]), Some(7));
        assert_eq!(count_of_rank(1, &ranks, &[]), Some(7));
        assert_eq!(count_of_rank(1, &ranks, &[7]), Some(11));
        assert_eq!(count_of_rank(2, &ranks, &[7]), None);

        // The lowest qualifying rank wins.
        let ranks = [3, 3, 9, 9, 9];
        assert_eq!(count_of_rank(2, &ranks, &[]), Some(3));
        assert_eq!(count_of_rank(3, &ranks, &[]), Some(9));
        assert_eq!(count_of_rank(2, &ranks, &[9]), Some(3));
        assert_eq!(count_of_rank(5, &ranks, &[]), None);
    }

    #[test]
    fn pairs() {
        assert_eq!(two_pair(&[4, 4, 8, 13, 13]), Some((13, 4)));
        assert_eq!(two_pair(&[2, 2, 3, 3, 14]), Some((3, 2)));
        assert_eq!(two_pair(&[4, 4, 8, 9, 13]), None);
        assert_eq!(two_pair(&[4, 5, 8, 9, 13]), None);
    }
}
