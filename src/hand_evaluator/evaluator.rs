use super::score::{HandCategory, Score};
use super::EvalError;
use crate::cards::{Card, Rank, Suit};
use crate::constants::{MAX_HAND_CARDS, MIN_HAND_CARDS};

// 5 consecutive bits in a rank mask
const STRAIGHT_MASK: u16 = 0b11111;
// ace also counts as the rank below two
const ACE_LOW_BIT: u16 = 1;

/// Scores the best five card hand out of 5, 6 or 7 cards
///
/// # Example
///
/// ```
/// use parrot_poker::cards::parse_cards;
/// use parrot_poker::hand_evaluator::{score, HandCategory};
/// let s = score(&parse_cards("2s8h2c2h2d8d").unwrap()).unwrap();
/// assert_eq!(s.category(), HandCategory::FourOfAKind);
/// assert_eq!(s.value(), 0x811117);
/// ```
pub fn score(cards: &[Card]) -> Result<Score, EvalError> {
    if cards.len() < MIN_HAND_CARDS || cards.len() > MAX_HAND_CARDS {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    let mut buffer = [cards[0]; MAX_HAND_CARDS];
    let hand = &mut buffer[..cards.len()];
    hand.copy_from_slice(cards);
    // largest to smallest
    hand.sort_unstable_by(|a, b| b.cmp(a));

    let (category, significant) = rank_hand(hand);
    Ok(Score::new(category, significant))
}

/// Returns the best category and its significant ranks
///
/// `cards` must be sorted from largest to smallest
fn rank_hand(cards: &[Card]) -> (HandCategory, [Rank; 5]) {
    let flush_suit = find_flush_suit(cards);

    if let Some(suit) = flush_suit {
        let suited = cards.iter().filter(|c| c.suit() == suit);
        if let Some(top) = highest_straight(rank_mask(suited)) {
            return (HandCategory::StraightFlush, straight_ranks(top));
        }
    }

    let groups = RankGroups::new(cards);
    let (m, n) = (groups.m_rank, groups.n_rank);

    if groups.m == 4 {
        return (HandCategory::FourOfAKind, [m, m, m, m, n]);
    }

    if groups.m == 3 && groups.n == 2 {
        return (HandCategory::FullHouse, [m, m, m, n, n]);
    }

    if let Some(suit) = flush_suit {
        let mut significant = [Rank::Two; 5];
        let suited = cards.iter().filter(|c| c.suit() == suit);
        for (slot, card) in significant.iter_mut().zip(suited) {
            *slot = card.rank();
        }
        return (HandCategory::Flush, significant);
    }

    if let Some(top) = highest_straight(rank_mask(cards.iter())) {
        return (HandCategory::Straight, straight_ranks(top));
    }

    let mut kickers = cards
        .iter()
        .map(|c| c.rank())
        .filter(|&r| r != m && r != n);

    if groups.m == 3 {
        let k = kickers.next().unwrap_or(n);
        return (HandCategory::ThreeOfAKind, [m, m, m, n, k]);
    }

    if groups.m == 2 && groups.n == 2 {
        let k = kickers.next().unwrap_or(n);
        return (HandCategory::TwoPair, [m, m, n, n, k]);
    }

    if groups.m == 2 {
        let k1 = kickers.next().unwrap_or(n);
        let k2 = kickers.next().unwrap_or(k1);
        return (HandCategory::Pair, [m, m, n, k1, k2]);
    }

    let mut significant = [Rank::Two; 5];
    for (slot, card) in significant.iter_mut().zip(cards) {
        *slot = card.rank();
    }
    (HandCategory::HighCard, significant)
}

/// The two most frequent ranks
///
/// `m` is the largest count, ties broken by the higher rank. `n` is the
/// largest count among the other ranks, capped at the `5 - m` cards still
/// needed for a five card hand.
struct RankGroups {
    m: u8,
    m_rank: Rank,
    n: u8,
    n_rank: Rank,
}

impl RankGroups {
    fn new(cards: &[Card]) -> RankGroups {
        let mut counts = [0u8; Rank::ALL.len() + 1];
        for c in cards {
            counts[usize::from(c.rank().ordinal())] += 1;
        }
        let count = |r: Rank| counts[usize::from(r.ordinal())];

        let mut groups = RankGroups {
            m: 0,
            m_rank: Rank::Two,
            n: 0,
            n_rank: Rank::Two,
        };
        // highest rank first, so a strict comparison keeps the higher rank on ties
        for &r in Rank::ALL.iter().rev() {
            if count(r) > groups.m {
                groups.m = count(r);
                groups.m_rank = r;
            }
        }
        let cap = 5u8.saturating_sub(groups.m);
        for &r in Rank::ALL.iter().rev() {
            if r == groups.m_rank {
                continue;
            }
            let c = std::cmp::min(count(r), cap);
            if c > groups.n {
                groups.n = c;
                groups.n_rank = r;
            }
        }
        groups
    }
}

fn find_flush_suit(cards: &[Card]) -> Option<Suit> {
    Suit::ALL
        .iter()
        .copied()
        .find(|&s| cards.iter().filter(|c| c.suit() == s).count() >= 5)
}

/// Bit per rank ordinal present, an ace also sets the ace low bit
fn rank_mask<'a, I: Iterator<Item = &'a Card>>(cards: I) -> u16 {
    let mut mask = 0u16;
    for c in cards {
        mask |= 1 << c.rank().ordinal();
        if c.rank() == Rank::Ace {
            mask |= ACE_LOW_BIT;
        }
    }
    mask
}

/// Ordinal of the top card of the highest straight in the mask
fn highest_straight(mask: u16) -> Option<u8> {
    let top = Rank::Ace.ordinal();
    let bottom = Rank::Five.ordinal();
    (bottom..=top)
        .rev()
        .find(|&t| (mask >> (t - bottom)) & STRAIGHT_MASK == STRAIGHT_MASK)
}

fn straight_ranks(top: u8) -> [Rank; 5] {
    let mut ranks = [Rank::Ace; 5];
    for (i, rank) in ranks.iter_mut().enumerate() {
        // ordinal 0 is the low ace of a wheel
        if let Some(r) = Rank::from_ordinal(top - i as u8) {
            *rank = r;
        }
    }
    ranks
}
