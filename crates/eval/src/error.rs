// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{ParseCardError, Token};

/// Errors returned when an input hand is rejected.
///
/// All errors are detected before any classification takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token that is not a card or a supported joker.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// Wrong number of cards or candidates.
    #[error("wrong number of {what}: expected {expected}, found {found}")]
    WrongArity {
        /// What was counted.
        what: &'static str,
        /// The expected count.
        expected: &'static str,
        /// The actual count.
        found: usize,
    },
    /// The same card or joker appears more than once in a hand.
    #[error("duplicate token {0} in hand")]
    DuplicateCard(Token),
}
