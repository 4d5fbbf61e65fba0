use std::fmt;

use super::{Card, CardError};
use crate::constants::MAX_KEY_CARDS;

/// Order independent identifier for a set of up to 8 cards
///
/// Each byte holds one card, smallest card in the lowest byte. Unused
/// bytes are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(pub u64);

impl Key {
    /// Unpacks the cards of the key in ascending order
    pub fn cards(self) -> Vec<Card> {
        parse_key(self)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Returns the key of an unordered set of up to 8 cards
///
/// # Example
///
/// ```
/// use parrot_poker::cards::{get_key, parse_cards, Key};
/// let key = get_key(&parse_cards("AhKh").unwrap()).unwrap();
/// assert_eq!(key, Key(0xd3c3));
/// ```
pub fn get_key(cards: &[Card]) -> Result<Key, CardError> {
    if cards.len() > MAX_KEY_CARDS {
        return Err(CardError::KeyTooLarge(cards.len()));
    }
    let mut sorted = [0u8; MAX_KEY_CARDS];
    for (i, card) in cards.iter().enumerate() {
        sorted[i] = card.to_u8();
    }
    sorted[..cards.len()].sort_unstable();
    let mut key = 0u64;
    for (i, &c) in sorted[..cards.len()].iter().enumerate() {
        key |= u64::from(c) << (8 * i);
    }
    Ok(Key(key))
}

/// Returns the cards packed into a key, in ascending order
///
/// Reading stops at the first byte that is not a card, which for keys
/// made by `get_key` is the first zero byte.
pub fn parse_key(key: Key) -> Vec<Card> {
    let mut cards = Vec::with_capacity(MAX_KEY_CARDS);
    for i in 0..MAX_KEY_CARDS {
        let byte = ((key.0 >> (8 * i)) & 0xff) as u8;
        match Card::from_u8(byte) {
            Some(card) => cards.push(card),
            None => break,
        }
    }
    cards
}
