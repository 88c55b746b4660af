// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is classified by [HandValue::eval] into a rank vector, a
//! [HandRank] category followed by category specific tie-break values. The
//! classification is an ordered decision list built on the rank predicates in
//! [predicates].
//!
//! [select_best] picks the best out of a sequence of candidate hands, walking
//! tie-break values with an absent value always losing and keeping the earliest
//! candidate among equal hands.

pub mod predicates;

mod select;
pub use select::{BestHand, select_best};

mod value;
pub use value::{HandRank, HandValue};
