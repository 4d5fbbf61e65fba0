use std::fmt;

use crate::cards::Rank;

// the category sits above the five 4 bit significant rank slots
pub const HAND_CATEGORY_SHIFT: u8 = 20;
const SLOT_BITS: u8 = 4;
const SLOT_MASK: u64 = 0xf;

/// Poker hand categories from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 1,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        };
        write!(f, "{}", name)
    }
}

/// Strength of the best five card hand
///
/// Bits 20-23: hand category
/// Bits 0-19: ranks of the five significant cards, most significant first
///
/// Comparing two scores compares the hands they were made from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u64);

impl Score {
    pub fn new(category: HandCategory, significant: [Rank; 5]) -> Score {
        let mut value = u64::from(category.ordinal()) << HAND_CATEGORY_SHIFT;
        for (i, rank) in significant.iter().enumerate() {
            value |= u64::from(rank.ordinal()) << (SLOT_BITS as usize * (4 - i));
        }
        Score(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub fn category(self) -> HandCategory {
        HandCategory::ALL[(self.0 >> HAND_CATEGORY_SHIFT) as usize - 1]
    }

    /// The five ranks that decide between hands of the same category
    pub fn significant_ranks(self) -> [Rank; 5] {
        let mut ranks = [Rank::Two; 5];
        for (i, rank) in ranks.iter_mut().enumerate() {
            let ordinal = (self.0 >> (SLOT_BITS as usize * (4 - i))) & SLOT_MASK;
            *rank = Rank::ALL[ordinal as usize - 1];
        }
        ranks
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({:#x})", self.0)
    }
}

impl fmt::Display for Score {
    /// # Example
    ///
    /// ```
    /// use parrot_poker::hand_evaluator::score;
    /// use parrot_poker::cards::parse_cards;
    /// let s = score(&parse_cards("TdAdQdKdJd").unwrap()).unwrap();
    /// assert_eq!(s.to_string(), "straight flush AKQJT");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: String = self.significant_ranks().iter().map(|r| r.to_char()).collect();
        write!(f, "{} {}", self.category(), ranks)
    }
}
