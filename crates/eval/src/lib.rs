// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Joker Poker hand evaluator.
//!
//! Finds the best 5 cards hand out of a 7 cards hand. [best_hand] searches all
//! the 21 5-cards subsets of a hand, [best_wild_hand] also accepts the two
//! colored jokers and tries every card each joker can stand for:
//!
//! ```
//! # use jokerpoker_eval::*;
//! let hand = parse_tokens("6C 7C 8C 9C TC 5C ?B")?;
//! let best = best_wild_hand(&hand)?;
//!
//! let cards = best.sorted_cards().map(|c| c.to_string());
//! assert_eq!(cards, ["7C", "8C", "9C", "JC", "TC"]);
//! assert_eq!(best.value().rank(), HandRank::StraightFlush);
//! # Ok::<(), Error>(())
//! ```
//!
//! Hands are ranked by [HandValue], see the [eval] module for the ranking rules.
//! Note that aces are always high, A-2-3-4-5 is not a straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, HandRank, HandValue, select_best};

mod error;
pub use error::Error;

mod search;
pub use search::{HAND_SIZE, best_hand, five_card_subsets};

mod wild;
pub use wild::best_wild_hand;

// Reexport cards types.
pub use jokerpoker_cards::{Card, Color, ParseCardError, Rank, Suit, Token, parse_tokens};
