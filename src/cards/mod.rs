mod card;
mod combinations;
mod deck;
mod key;

use thiserror::Error;

pub use card::{parse_cards, Card, Rank, Suit};
pub use combinations::{binomial, combinations};
pub use deck::Deck;
pub use key::{get_key, parse_key, Key};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("a key holds at most 8 cards, got {0}")]
    KeyTooLarge(usize),
    #[error("deck is empty")]
    EmptyDeck,
    #[error("invalid card string {0:?}")]
    InvalidCard(String),
}
