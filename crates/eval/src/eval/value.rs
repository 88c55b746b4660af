// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use super::predicates::{count_of_rank, is_flush, is_straight, rank_values, two_pair};
use crate::Card;

/// Maximum number of tie-break values, a two pair hand uses the two pair ranks
/// followed by the five sorted ranks.
const TIE_BREAK_SIZE: usize = 7;

/// A poker hand category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the lowest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// The rank vector of a 5 cards hand.
///
/// A value is a [HandRank] category followed by a fixed number of tie-break
/// slots. Each category fills a different prefix of the slots:
///
/// ```text
///   StraightFlush  max rank
///   FourOfAKind    quads rank, kicker
///   FullHouse      trips rank, pair rank (absent for trips without a pair)
///   Flush          r0 r1 r2 r3 r4
///   Straight       max rank
///   ThreeOfAKind   trips rank, r0 r1 r2 r3 r4
///   TwoPair        high pair, low pair, r0 r1 r2 r3 r4
///   OnePair        pair rank, r0 r1 r2 r3 r4
///   HighCard       r0 r1 r2 r3 r4
/// ```
///
/// where `r0..r4` are the ranks sorted in ascending order. Values of the same
/// category are compared slot by slot and an absent slot always loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    rank: HandRank,
    tie_break: [Option<u8>; TIE_BREAK_SIZE],
}

/// Outcome of comparing a candidate value with the current best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// The candidate becomes the new best.
    Replace,
    /// The current best is retained.
    Retain,
}

impl HandValue {
    /// Classifies a 5 cards hand.
    ///
    /// Branches are checked in order and the first match wins. Any hand with
    /// three cards of a rank is a [HandRank::FullHouse], with an absent pair
    /// slot when the other two cards don't pair.
    pub fn eval(hand: &[Card; 5]) -> Self {
        let ranks = rank_values(hand);
        let flush = is_flush(hand);
        let straight = is_straight(&ranks);
        let max = ranks[4];

        if straight && flush {
            return Self::new(HandRank::StraightFlush, [Some(max)]);
        }

        if let Some(quads) = count_of_rank(4, &ranks, &[]) {
            let kicker = count_of_rank(1, &ranks, &[quads]);
            return Self::new(HandRank::FourOfAKind, [Some(quads), kicker]);
        }

        if let Some(trips) = count_of_rank(3, &ranks, &[]) {
            let pair = count_of_rank(2, &ranks, &[trips]);
            return Self::new(HandRank::FullHouse, [Some(trips), pair]);
        }

        if flush {
            return Self::with_ranks(HandRank::Flush, [], ranks);
        }

        if straight {
            return Self::new(HandRank::Straight, [Some(max)]);
        }

        // Unreachable for 5 cards, any trips is caught by the full house branch.
        if let Some(trips) = count_of_rank(3, &ranks, &[]) {
            return Self::with_ranks(HandRank::ThreeOfAKind, [trips], ranks);
        }

        if let Some((high, low)) = two_pair(&ranks) {
            return Self::with_ranks(HandRank::TwoPair, [high, low], ranks);
        }

        if let Some(pair) = count_of_rank(2, &ranks, &[]) {
            return Self::with_ranks(HandRank::OnePair, [pair], ranks);
        }

        Self::with_ranks(HandRank::HighCard, [], ranks)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break slots, absent slots are `None`.
    pub fn tie_break(&self) -> &[Option<u8>] {
        &self.tie_break
    }

    fn new<const N: usize>(rank: HandRank, values: [Option<u8>; N]) -> Self {
        let mut tie_break = [None; TIE_BREAK_SIZE];
        tie_break[..N].copy_from_slice(&values);
        Self { rank, tie_break }
    }

    fn with_ranks<const N: usize>(rank: HandRank, lead: [u8; N], ranks: [u8; 5]) -> Self {
        let mut tie_break = [None; TIE_BREAK_SIZE];
        for (slot, value) in tie_break.iter_mut().zip(lead.into_iter().chain(ranks)) {
            *slot = Some(value);
        }

        Self { rank, tie_break }
    }

    /// Decides if `self` displaces `best`.
    ///
    /// A higher category always replaces. Within a category the slots are
    /// walked in order: an absent candidate slot or a greater best slot retains
    /// the best, a greater candidate slot replaces it, and equal slots move on
    /// to the next one. When every slot is equal the best is retained.
    pub(crate) fn verdict(&self, best: &HandValue) -> Verdict {
        if self.rank != best.rank {
            return if self.rank > best.rank {
                Verdict::Replace
            } else {
                Verdict::Retain
            };
        }

        for (candidate, current) in self.tie_break.iter().zip(&best.tie_break) {
            match (candidate, current) {
                (None, _) => return Verdict::Retain,
                (Some(_), None) => return Verdict::Replace,
                (Some(c), Some(b)) if b > c => return Verdict::Retain,
                (Some(c), Some(b)) if b < c => return Verdict::Replace,
                _ => {}
            }
        }

        Verdict::Retain
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            for (a, b) in self.tie_break.iter().zip(&other.tie_break) {
                let ord = match (a, b) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (Some(a), Some(b)) => a.cmp(b),
                };

                if ord != Ordering::Equal {
                    return ord;
                }
            }

            Ordering::Equal
        })
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
