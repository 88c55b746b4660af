// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards and joker tokens definitions.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Rank characters indexed by rank, deuce first.
const RANK_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Numeric rank values indexed by rank, deuce first.
const RANK_VALUES: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// The character that starts a joker token.
const JOKER_CHAR: char = '?';

/// Error returned when a token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not a known card or joker.
    #[error("invalid card token {0:?}")]
    InvalidCardToken(String),
    /// The token is a joker with an unknown color.
    #[error("unsupported joker color {0:?}")]
    UnsupportedJoker(char),
}

/// A Poker card.
///
/// A card is a plain (rank, suit) value, cards compare equal only when both
/// rank and suit are equal.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns all cards of the given color, rank major.
    ///
    /// For the black color this yields 2C, 2S, 3C, 3S, ..., AC, AS.
    pub fn of_color(color: Color) -> impl Iterator<Item = Card> {
        Rank::ranks().flat_map(move |r| color.suits().map(move |s| Card::new(r, s)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCardError::InvalidCardToken(s.to_string());

        let mut chars = s.chars();
        let (Some(rc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(rc).ok_or_else(invalid)?;
        let suit = Suit::from_char(sc).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank face value, from 2 for a deuce to 14 for an ace.
    ///
    /// The ace is always high.
    pub fn value(self) -> u8 {
        RANK_VALUES[self as usize]
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let idx = RANK_CHARS.iter().position(|&rc| rc == c)?;
        Rank::ranks().nth(idx)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RANK_CHARS[*self as usize])
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// Returns this suit color.
    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A suit color, the constraint carried by a joker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// Returns all colors, black first.
    pub fn colors() -> impl DoubleEndedIterator<Item = Color> {
        [Color::Black, Color::Red].into_iter()
    }

    /// Returns the two suits of this color.
    pub fn suits(self) -> impl DoubleEndedIterator<Item = Suit> + Clone {
        match self {
            Color::Black => [Suit::Clubs, Suit::Spades].into_iter(),
            Color::Red => [Suit::Hearts, Suit::Diamonds].into_iter(),
        }
    }

    fn from_char(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self {
            Color::Black => 'B',
            Color::Red => 'R',
        };

        write!(f, "{color}")
    }
}

/// An input token, either a concrete card or a joker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A joker that stands for any card of its color.
    Joker(Color),
}

impl Token {
    /// Returns the concrete card, `None` for jokers.
    pub fn card(&self) -> Option<Card> {
        match self {
            Token::Card(card) => Some(*card),
            Token::Joker(_) => None,
        }
    }

    /// Checks if this token is a joker of the given color.
    pub fn is_joker(&self, color: Color) -> bool {
        matches!(self, Token::Joker(c) if *c == color)
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Joker(color) => write!(f, "{JOKER_CHAR}{color}"),
        }
    }
}

impl FromStr for Token {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(JOKER_CHAR) {
            Some(rest) => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Color::from_char(c)
                        .map(Token::Joker)
                        .ok_or(ParseCardError::UnsupportedJoker(c)),
                    _ => Err(ParseCardError::InvalidCardToken(s.to_string())),
                }
            }
            None => s.parse().map(Token::Card),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// Parses a whitespace separated list of tokens, e.g. `"6C 7C 8C 9C TC 5C ?B"`.
pub fn parse_tokens(s: &str) -> Result<Vec<Token>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
