use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    /// Parse a suit from its symbol (`♠♥♦♣`) or ASCII letter (`shdc`).
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            '♠' | 's' | 'S' => Some(Suit::Spades),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Parse a rank from its token character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Position in rank order, 0 for Two through 12 for Ace.
    pub fn index(self) -> u8 {
        self as u8 - 2
    }
}

/// Represents a single playing card with a suit and rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    /// Parse a two-character token such as `"A♠"` or `"Td"`.
    pub fn parse(token: &str) -> Result<Card, GameError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidCard(token.to_string()));
        };
        let rank = Rank::from_char(r).ok_or_else(|| GameError::InvalidCard(token.to_string()))?;
        let suit = Suit::from_char(s).ok_or_else(|| GameError::InvalidCard(token.to_string()))?;
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

/// The hero's two private cards, kept as the caller-supplied tokens.
///
/// Tokens are not validated here: a malformed token is carried through and
/// the equity estimator falls back to a neutral strength for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCards {
    tokens: [String; 2],
}

impl HoleCards {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            tokens: [first.into(), second.into()],
        }
    }

    /// Build from a token list that must hold exactly two entries.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, GameError> {
        match tokens {
            [a, b] => Ok(Self::new(a.as_ref(), b.as_ref())),
            _ => Err(GameError::HoleCardCount(tokens.len())),
        }
    }

    /// Parse whitespace- or comma-separated tokens, e.g. `"7♦ 2♣"`.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        let tokens = split_tokens(s);
        Self::from_tokens(&tokens)
    }

    pub fn tokens(&self) -> &[String; 2] {
        &self.tokens
    }

    /// Rank of each token, `None` where the token is malformed.
    pub fn ranks(&self) -> [Option<Rank>; 2] {
        [rank_of(&self.tokens[0]), rank_of(&self.tokens[1])]
    }

    /// True when both tokens carry the same suit character.
    pub fn suited(&self) -> bool {
        let a = self.tokens[0].chars().nth(1);
        let b = self.tokens[1].chars().nth(1);
        match (a.and_then(Suit::from_char), b.and_then(Suit::from_char)) {
            (Some(x), Some(y)) => x == y,
            _ => a.is_some() && a == b,
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.tokens[0], self.tokens[1])
    }
}

fn rank_of(token: &str) -> Option<Rank> {
    token.chars().next().and_then(Rank::from_char)
}

fn split_tokens(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse a community board. Only 0, 3, 4 or 5 cards are accepted.
pub fn parse_board(s: &str) -> Result<Vec<Card>, GameError> {
    let board = split_tokens(s)
        .into_iter()
        .map(Card::parse)
        .collect::<Result<Vec<_>, _>>()?;
    match board.len() {
        0 | 3 | 4 | 5 => Ok(board),
        n => Err(GameError::BoardSize(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_and_ascii_suits() {
        let a = Card::parse("A♠").unwrap();
        let b = Card::parse("As").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "A♠");
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(Card::parse("1♠").is_err());
        assert!(Card::parse("A").is_err());
        assert!(Card::parse("A♠x").is_err());
        assert!(Card::parse("Ax").is_err());
    }

    #[test]
    fn rank_index_spans_zero_to_twelve() {
        assert_eq!(Rank::Two.index(), 0);
        assert_eq!(Rank::Ace.index(), 12);
    }

    #[test]
    fn hole_cards_require_exactly_two_tokens() {
        assert!(HoleCards::parse("7♦ 2♣").is_ok());
        assert_eq!(
            HoleCards::parse("7♦ 2♣ 3♠"),
            Err(GameError::HoleCardCount(3))
        );
        assert_eq!(HoleCards::parse(""), Err(GameError::HoleCardCount(0)));
    }

    #[test]
    fn suitedness_handles_mixed_notation() {
        assert!(HoleCards::new("A♠", "Ks").suited());
        assert!(!HoleCards::new("A♠", "K♥").suited());
    }

    #[test]
    fn board_sizes() {
        assert_eq!(parse_board("").unwrap().len(), 0);
        assert_eq!(parse_board("A♣ K♦ 5♥").unwrap().len(), 3);
        assert_eq!(parse_board("A♣,K♦,5♥,8♠,2♦").unwrap().len(), 5);
        assert_eq!(parse_board("A♣ K♦"), Err(GameError::BoardSize(2)));
    }
}
