// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards search over a 7 cards hand.
use log::debug;

use crate::{BestHand, Card, Error, Token, eval::select_best};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 7;

/// Returns an iterator over all the 5 cards subsets of `cards`.
///
/// Subsets are generated in lexicographic index order, for 7 cards this yields
/// the 21 subsets starting with cards `[0, 1, 2, 3, 4]`. Yields nothing if
/// there are less than 5 cards.
pub fn five_card_subsets(cards: &[Card]) -> impl Iterator<Item = [Card; 5]> + '_ {
    let n = cards.len();
    (0..n).flat_map(move |c1| {
        (c1 + 1..n).flat_map(move |c2| {
            (c2 + 1..n).flat_map(move |c3| {
                (c3 + 1..n).flat_map(move |c4| {
                    (c4 + 1..n).map(move |c5| {
                        [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]
                    })
                })
            })
        })
    })
}

/// Returns the best 5 cards hand out of a 7 cards hand.
///
/// ```
/// # use jokerpoker_eval::*;
/// let cards = parse_tokens("6C 7C 8C 9C TC 5C JS")?
///     .iter()
///     .filter_map(Token::card)
///     .collect::<Vec<_>>();
/// let best = best_hand(&cards)?;
/// assert_eq!(best.value().rank(), HandRank::StraightFlush);
/// # Ok::<(), Error>(())
/// ```
pub fn best_hand(cards: &[Card]) -> Result<BestHand, Error> {
    validate_hand(cards)?;

    let best = select_best(five_card_subsets(cards))?;
    debug!("best hand {:?} {}", best.cards(), best.value().rank());
    Ok(best)
}

/// Checks that a hand has [HAND_SIZE] distinct tokens.
pub(crate) fn validate_hand<T>(hand: &[T]) -> Result<(), Error>
where
    T: Copy + PartialEq + Into<Token>,
{
    if hand.len() != HAND_SIZE {
        return Err(Error::WrongArity {
            what: "cards in hand",
            expected: "7",
            found: hand.len(),
        });
    }

    for (idx, token) in hand.iter().enumerate() {
        if hand[..idx].contains(token) {
            return Err(Error::DuplicateCard((*token).into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRank, HandValue, parse_tokens};
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn cards(s: &str) -> Vec<Card> {
        parse_tokens(s)
            .unwrap()
            .iter()
            .map(|t| t.card().unwrap())
            .collect()
    }

    fn sorted(best: &BestHand) -> Vec<String> {
        best.sorted_cards().iter().map(|c| c.to_string()).collect()
    }

    fn all_cards() -> Vec<Card> {
        cards(
            "2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC AC \
             2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS AS \
             2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH AH \
             2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD AD",
        )
    }

    #[test]
    fn subsets() {
        let hand = cards("2C 3C 4C 5C 6C 7C 8C");
        let subsets = five_card_subsets(&hand).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], hand[..5]);
        assert_eq!(subsets[20], hand[2..]);

        let unique = subsets
            .iter()
            .map(|s| {
                let mut s = s.map(|c| c.to_string());
                s.sort();
                s
            })
            .collect::<HashSet<_>>();
        assert_eq!(unique.len(), 21);

        assert_eq!(five_card_subsets(&hand[..5]).count(), 1);
        assert_eq!(five_card_subsets(&hand[..4]).count(), 0);
        assert_eq!(five_card_subsets(&all_cards()).count(), 2_598_960);
    }

    #[test]
    fn straight_flush_over_straight() {
        let best = best_hand(&cards("6C 7C 8C 9C TC 5C JS")).unwrap();
        assert_eq!(sorted(&best), ["6C", "7C", "8C", "9C", "TC"]);
        assert_eq!(best.value().rank(), HandRank::StraightFlush);
    }

    #[test]
    fn full_house_higher_pair() {
        let best = best_hand(&cards("TD TC TH 7C 7D 8C 8S")).unwrap();
        assert_eq!(sorted(&best), ["8C", "8S", "TC", "TD", "TH"]);
        assert_eq!(best.value().rank(), HandRank::FullHouse);
    }

    #[test]
    fn four_of_a_kind_best_kicker() {
        let best = best_hand(&cards("JD TC TH 7C 7D 7S 7H")).unwrap();
        assert_eq!(sorted(&best), ["7C", "7D", "7H", "7S", "JD"]);
        assert_eq!(best.value().rank(), HandRank::FourOfAKind);
    }

    #[test]
    fn no_wheel_straight() {
        let best = best_hand(&cards("AC 2D 3H 4S 5C 9D JH")).unwrap();
        assert_eq!(best.value().rank(), HandRank::HighCard);
    }

    #[test]
    fn wrong_arity() {
        let err = best_hand(&cards("6C 7C 8C 9C TC 5C")).unwrap_err();
        assert_eq!(
            err,
            Error::WrongArity {
                what: "cards in hand",
                expected: "7",
                found: 6
            }
        );

        let err = best_hand(&cards("6C 7C 8C 9C TC 5C JS QS")).unwrap_err();
        assert!(matches!(err, Error::WrongArity { found: 8, .. }));
    }

    #[test]
    fn duplicate_cards() {
        let hand = cards("6C 7C 8C 9C TC 5C 6C");
        let err = best_hand(&hand).unwrap_err();
        assert_eq!(err, Error::DuplicateCard(Token::Card(hand[0])));
    }

    #[test]
    fn rank_counts_all_hands() {
        let mut counts = [0usize; 9];
        for hand in five_card_subsets(&all_cards()) {
            counts[HandValue::eval(&hand).rank() as usize] += 1;
        }

        // No trips category and no wheel straights.
        assert_eq!(
            counts,
            [1_303_560, 1_098_240, 123_552, 0, 9_180, 5_112, 58_656, 624, 36]
        );
    }

    #[test]
    fn maximal_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = all_cards();

        for _ in 0..500 {
            deck.shuffle(&mut rng);
            let hand = &deck[..7];
            let best = best_hand(hand).unwrap();

            let distinct = best.cards().iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), 5);
            assert!(best.cards().iter().all(|c| hand.contains(c)));

            for subset in five_card_subsets(hand) {
                assert!(best.value() >= &HandValue::eval(&subset), "{hand:?}");
            }
        }
    }
}
