use std::fmt;
use std::str::FromStr;

use super::CardError;
use crate::constants::*;

/// Rank of a card, `Two` is the lowest ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 1,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Every rank from lowest to highest
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Rank> {
        if ordinal >= 1 && ordinal <= RANK_COUNT {
            Some(Rank::ALL[usize::from(ordinal - 1)])
        } else {
            None
        }
    }

    pub fn to_char(self) -> char {
        RANK_TO_CHAR[usize::from(self.ordinal() - 1)]
    }

    /// Convert rank char to rank, case insensitive
    ///
    /// # Example
    ///
    /// ```
    /// use parrot_poker::cards::Rank;
    /// assert_eq!(Rank::from_char('t'), Some(Rank::Ten));
    /// ```
    pub fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        RANK_TO_CHAR
            .iter()
            .position(|&r| r == c)
            .map(|i| Rank::ALL[i])
    }
}

/// Suit of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Club = 1,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Suit> {
        if ordinal >= 1 && ordinal <= SUIT_COUNT {
            Some(Suit::ALL[usize::from(ordinal - 1)])
        } else {
            None
        }
    }

    pub fn to_char(self) -> char {
        SUIT_TO_CHAR[usize::from(self.ordinal() - 1)]
    }

    /// Convert suit char to suit, case insensitive
    pub fn from_char(c: char) -> Option<Suit> {
        let c = c.to_ascii_lowercase();
        SUIT_TO_CHAR
            .iter()
            .position(|&s| s == c)
            .map(|i| Suit::ALL[i])
    }
}

/// A single playing card packed into one byte
///
/// Bits 4-7: rank ordinal (2 = 1 .. A = 13)
/// Bits 0-3: suit ordinal (club = 1 .. spade = 4)
///
/// A card is never 0, so a zero byte can terminate a sequence of cards.
/// Ordering compares the packed byte: rank first, then suit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card((rank as u8) << 4 | suit as u8)
    }

    /// Unpack a card from its byte representation
    ///
    /// Returns `None` when the byte does not hold a valid rank and suit
    pub fn from_u8(value: u8) -> Option<Card> {
        let rank = Rank::from_ordinal(value >> 4)?;
        let suit = Suit::from_ordinal(value & 0xf)?;
        Some(Card::new(rank, suit))
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[usize::from(self.0 >> 4) - 1]
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[usize::from(self.0 & 0xf) - 1]
    }

    /// Dense index in 0..52, 4 * rank + suit with both counted from 0
    pub fn index(self) -> usize {
        usize::from(SUIT_COUNT) * usize::from((self.0 >> 4) - 1) + usize::from((self.0 & 0xf) - 1)
    }
}

impl fmt::Display for Card {
    /// Writes card as rank char followed by suit char
    ///
    /// # Example
    /// ```
    /// // prints 'Ah'
    /// use parrot_poker::cards::{Card, Rank, Suit};
    /// let card = Card::new(Rank::Ace, Suit::Heart);
    /// println!("{}", card);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().to_char(), self.suit().to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::from_char(r), Suit::from_char(s)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(CardError::InvalidCard(text.to_string())),
            },
            _ => Err(CardError::InvalidCard(text.to_string())),
        }
    }
}

/// Converts a string of concatenated cards into a vector of cards
///
/// # Arguments
///
/// * `text` - A card string
///
/// # Example
///
/// ```
/// use parrot_poker::cards::parse_cards;
/// let board = parse_cards("As2hQd").unwrap();
/// assert_eq!(board.len(), 3);
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardError> {
    let char_vec: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if char_vec.len() % 2 != 0 {
        return Err(CardError::InvalidCard(text.to_string()));
    }
    char_vec
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}
