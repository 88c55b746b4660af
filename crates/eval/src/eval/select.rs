// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection.
use log::trace;
use serde::Serialize;

use super::value::{HandValue, Verdict};
use crate::{Card, Error};

/// A selected 5 cards hand and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestHand {
    cards: [Card; 5],
    #[serde(rename = "rank", serialize_with = "serialize_rank")]
    value: HandValue,
}

impl BestHand {
    /// The five cards in the order they were selected.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The five cards sorted by their token string, `"7C" < "JC" < "TC"`.
    pub fn sorted_cards(&self) -> [Card; 5] {
        let mut cards = self.cards;
        cards.sort_by_cached_key(|c| c.to_string());
        cards
    }

    /// The hand value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }
}

fn serialize_rank<S: serde::Serializer>(value: &HandValue, s: S) -> Result<S::Ok, S::Error> {
    value.rank().serialize(s)
}

/// Returns the best hand out of the candidate hands.
///
/// Candidates are evaluated in order and a candidate replaces the current best
/// only when it is strictly better, so among equal hands the earliest wins.
/// Returns an error if there are no candidates.
pub fn select_best<I>(candidates: I) -> Result<BestHand, Error>
where
    I: IntoIterator<Item = [Card; 5]>,
{
    let mut best: Option<BestHand> = None;

    for cards in candidates {
        let value = HandValue::eval(&cards);
        let replace = match &best {
            None => true,
            Some(current) => value.verdict(&current.value) == Verdict::Replace,
        };

        if replace {
            trace!("new best {cards:?} {:?}", value.rank());
            best = Some(BestHand { cards, value });
        }
    }

    best.ok_or(Error::WrongArity {
        what: "candidate hands",
        expected: "at least 1",
        found: 0,
    })
}
