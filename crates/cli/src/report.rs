// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation report for a single hand.
use jokerpoker_eval::{BestHand, Error, Token, best_hand, best_wild_hand, parse_tokens};
use log::debug;
use serde::Serialize;
use std::fmt;

/// A hand and its best 5 cards.
#[derive(Debug, Serialize)]
pub struct Report {
    hand: Vec<Token>,
    #[serde(flatten)]
    best: BestHand,
}

impl Report {
    /// Parses and evaluates a hand, jokers are only expanded if present.
    pub fn evaluate(line: &str) -> Result<Self, Error> {
        let hand = parse_tokens(line)?;
        let cards = hand.iter().filter_map(Token::card).collect::<Vec<_>>();

        let best = if cards.len() == hand.len() {
            best_hand(&cards)?
        } else {
            debug!("evaluating {} jokers", hand.len() - cards.len());
            best_wild_hand(&hand)?
        };

        Ok(Self { hand, best })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.hand {
            write!(f, "{token} ")?;
        }

        write!(f, "=>")?;
        for card in self.best.sorted_cards() {
            write!(f, " {card}")?;
        }

        write!(f, " ({})", self.best.value().rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report() {
        let report = Report::evaluate("6C 7C 8C 9C TC 5C ?B").unwrap();
        assert_eq!(
            report.to_string(),
            "6C 7C 8C 9C TC 5C ?B => 7C 8C 9C JC TC (Straight Flush)"
        );

        let report = Report::evaluate("TD TC TH 7C 7D 8C 8S").unwrap();
        assert_eq!(
            report.to_string(),
            "TD TC TH 7C 7D 8C 8S => 8C 8S TC TD TH (Full House)"
        );
    }

    #[test]
    fn json_report() {
        let report = Report::evaluate("TD TC 5H 5C 7C ?R ?B").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hand"][5], "?R");
        assert_eq!(json["rank"], "FourOfAKind");
        assert_eq!(json["cards"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn invalid_hands() {
        assert!(matches!(
            Report::evaluate("TD TC 5H"),
            Err(Error::WrongArity { found: 3, .. })
        ));
        assert!(matches!(
            Report::evaluate("TD TC 5H 5C 7C ?R ?Y"),
            Err(Error::Parse(_))
        ));
    }
}
