// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Joker Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use jokerpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! and the [Token] type for hands that may contain the two colored jokers, a
//! black joker `?B` that stands for any clubs or spades card and a red joker `?R`
//! that stands for any hearts or diamonds card:
//!
//! ```
//! # use jokerpoker_cards::{parse_tokens, Color, Token};
//! let tokens = parse_tokens("TD TC 5H 5C 7C ?R ?B").unwrap();
//! assert_eq!(tokens[5], Token::Joker(Color::Red));
//! assert!(tokens[6].is_joker(Color::Black));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Color, ParseCardError, Rank, Suit, Token, parse_tokens};
