// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards search over a 7 cards hand with jokers.
use log::debug;

use crate::{
    BestHand, Card, Color, Error, Token,
    eval::select_best,
    search::{five_card_subsets, validate_hand},
};

/// Concrete hands built by substituting jokers one color at a time.
///
/// Each substitution step builds a new set of hands from the previous one so
/// that a substitute is only checked against the hand it is extending.
#[derive(Debug)]
struct Substitutions {
    hands: Vec<Vec<Token>>,
}

impl Substitutions {
    fn new(hand: &[Token]) -> Self {
        Self {
            hands: vec![hand.to_vec()],
        }
    }

    /// Replaces the `color` joker with every card of that color that is not
    /// already in the hand.
    fn substitute(self, color: Color) -> Self {
        let hands: Vec<Vec<Token>> = self
            .hands
            .iter()
            .flat_map(|hand| {
                Card::of_color(color)
                    .map(Token::Card)
                    .filter(move |card| !hand.contains(card))
                    .map(move |card| {
                        hand.iter()
                            .map(|t| if t.is_joker(color) { card } else { *t })
                            .collect::<Vec<_>>()
                    })
            })
            .collect();

        Self { hands }
    }

    /// Returns the hands that have no jokers left.
    fn into_concrete(self) -> Vec<Vec<Card>> {
        self.hands
            .into_iter()
            .filter_map(|hand| hand.iter().map(Token::card).collect::<Option<Vec<_>>>())
            .collect()
    }
}

/// Returns the best 5 cards hand out of a 7 cards hand that may contain jokers.
///
/// The black joker `?B` stands for any clubs or spades card and the red joker
/// `?R` for any hearts or diamonds card, a joker never stands for a card that
/// is already in the hand. A hand without jokers gives the same result as
/// [best_hand](crate::best_hand).
///
/// ```
/// # use jokerpoker_eval::*;
/// let hand = parse_tokens("TD TC 5H 5C 7C ?R ?B")?;
/// let best = best_wild_hand(&hand)?;
/// assert_eq!(best.value().rank(), HandRank::FourOfAKind);
/// # Ok::<(), Error>(())
/// ```
pub fn best_wild_hand(hand: &[Token]) -> Result<BestHand, Error> {
    validate_hand(hand)?;

    let mut substitutions = Substitutions::new(hand);
    for color in Color::colors() {
        if hand.iter().any(|t| t.is_joker(color)) {
            substitutions = substitutions.substitute(color);
        }
    }

    let hands = substitutions.into_concrete();
    debug!("expanded {} concrete hands", hands.len());

    let best = select_best(hands.iter().flat_map(|h| five_card_subsets(h)))?;
    debug!("best wild hand {:?} {}", best.cards(), best.value().rank());
    Ok(best)
}
