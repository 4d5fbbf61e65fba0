use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Card, CardError, Rank, Suit};

/// An ordered collection of cards that can be shuffled, dealt and trimmed
///
/// The deck owns its source of randomness so that shuffles can be
/// reproduced by handing it a seeded rng.
#[derive(Debug, Clone)]
pub struct Deck<R = SmallRng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<SmallRng> {
    /// Creates a full 52 card deck in ascending order, later shuffles use an
    /// rng seeded from the operating system
    pub fn new() -> Self {
        Deck::with_rng(SmallRng::from_entropy())
    }

    /// Creates a deck over an arbitrary set of cards, kept in the given order
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for Deck<SmallRng> {
    fn default() -> Self {
        Deck::new()
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a full 52 card deck in ascending order using the given rng for shuffles
    ///
    /// # Example
    ///
    /// ```
    /// use parrot_poker::cards::Deck;
    /// use rand::{rngs::SmallRng, SeedableRng};
    /// let mut deck = Deck::with_rng(SmallRng::seed_from_u64(7));
    /// deck.shuffle();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        let mut cards = Vec::with_capacity(Rank::ALL.len() * Suit::ALL.len());
        for &rank in &Rank::ALL {
            for &suit in &Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, rng }
    }

    /// Uniformly permutes the remaining cards
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }
}

impl<R> Deck<R> {
    /// Remaining cards, front of the deck first
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deals one card from the front of the deck
    pub fn draw(&mut self) -> Result<Card, CardError> {
        if self.cards.is_empty() {
            return Err(CardError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Removes each listed card once
    ///
    /// Cards that are not in the deck are ignored, a card listed twice is
    /// only removed as many times as it is present.
    pub fn remove(&mut self, cards: &[Card]) {
        for card in cards {
            if let Some(i) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(i);
            }
        }
    }
}
