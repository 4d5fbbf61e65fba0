use std::collections::BTreeMap;

use super::{check_board, EquityError};
use crate::cards::{combinations, Card, Rank, Suit};
use crate::constants::{HOLE_CARDS, MAX_HAND_CARDS};
use crate::hand_evaluator::{score, Score};

/// A players two private cards
pub type Hole = [Card; HOLE_CARDS];

/// Every hole that makes the same score with a fixed board
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    score: Score,
    holes: Vec<Hole>,
}

impl Level {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

/// Sorts every hole that can be made from `pool` into levels by its score
/// with `board`, best level first
///
/// `pool` should not contain board cards but does not have to be the rest
/// of the deck. The board must hold 3 to 5 cards.
///
/// # Example
///
/// ```
/// use parrot_poker::cards::{parse_cards, Deck};
/// use parrot_poker::equity_calculator::evaluate;
/// let board = parse_cards("AhKhQh").unwrap();
/// let mut deck = Deck::new();
/// deck.remove(&board);
/// let levels = evaluate(deck.cards(), &board).unwrap();
/// let holes: usize = levels.iter().map(|l| l.len()).sum();
/// assert_eq!(holes, 1176);
/// ```
pub fn evaluate(pool: &[Card], board: &[Card]) -> Result<Vec<Level>, EquityError> {
    check_board(board)?;

    let mut ranking: BTreeMap<Score, Vec<Hole>> = BTreeMap::new();
    for hole in combinations(pool, HOLE_CARDS) {
        let hole = [hole[0], hole[1]];
        let s = score_with_board(&hole, board)?;
        ranking.entry(s).or_insert_with(Vec::new).push(hole);
    }

    Ok(ranking
        .into_iter()
        .rev()
        .map(|(score, holes)| Level { score, holes })
        .collect())
}

/// Scores a hole together with a board
pub(crate) fn score_with_board(hole: &[Card], board: &[Card]) -> Result<Score, EquityError> {
    let n = hole.len() + board.len();
    if n > MAX_HAND_CARDS {
        return Err(EquityError::InvalidBoardSize(board.len()));
    }
    let mut hand = [Card::new(Rank::Two, Suit::Club); MAX_HAND_CARDS];
    hand[..hole.len()].copy_from_slice(hole);
    hand[hole.len()..n].copy_from_slice(board);
    Ok(score(&hand[..n])?)
}
