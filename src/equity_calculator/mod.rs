mod current;
mod future;
mod initial;
mod levels;
mod outcome;
mod outcome_table;
mod workers;

use thiserror::Error;

use crate::cards::{Card, CardError, Key};
use crate::constants::{BOARD_CARDS, CARD_COUNT, HOLE_CARDS, MIN_BOARD_CARDS};
use crate::hand_evaluator::EvalError;

pub use current::{current_order, CurrentOrder};
pub use future::{future_outcomes, future_outcomes_with_threads};
pub use initial::{
    compute_initial_outcomes, compute_initial_outcomes_over, initial_outcomes,
    precompute_initial_outcomes,
};
pub use levels::{evaluate, Hole, Level};
pub use outcome::{Outcome, Tally};
pub use outcome_table::OutcomeTable;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquityError {
    #[error("a hole has exactly 2 cards, got {0}")]
    InvalidHoleSize(usize),
    #[error("a board has 3 to 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("board is empty, use initial_outcomes for preflop holes")]
    EmptyBoard,
    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),
    #[error("initial outcome for key {0} not found")]
    OutcomeNotFound(Key),
    #[error("outcome table {path} is unavailable: {reason}")]
    CacheUnavailable { path: String, reason: String },
    #[error("outcome table is malformed: {0}")]
    CacheMalformed(String),
    #[error("unable to write outcome table {path}: {reason}")]
    CacheWrite { path: String, reason: String },
    #[error("worker thread panicked")]
    WorkerPanicked,
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Card(#[from] CardError),
}

fn check_hole(hole: &[Card]) -> Result<(), EquityError> {
    if hole.len() != HOLE_CARDS {
        return Err(EquityError::InvalidHoleSize(hole.len()));
    }
    Ok(())
}

fn check_board(board: &[Card]) -> Result<(), EquityError> {
    if board.len() < MIN_BOARD_CARDS || board.len() > BOARD_CARDS {
        return Err(EquityError::InvalidBoardSize(board.len()));
    }
    Ok(())
}

/// Fails on the first card seen twice across the hole and board
fn check_distinct(hole: &[Card], board: &[Card]) -> Result<(), EquityError> {
    let mut seen = [false; CARD_COUNT as usize];
    for &card in hole.iter().chain(board) {
        if seen[card.index()] {
            return Err(EquityError::DuplicateCard(card));
        }
        seen[card.index()] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_check_hole() {
        assert!(check_hole(&parse_cards("AhKh").unwrap()).is_ok());
        assert_eq!(
            check_hole(&parse_cards("Ah").unwrap()),
            Err(EquityError::InvalidHoleSize(1))
        );
    }

    #[test]
    fn test_check_board() {
        assert!(check_board(&parse_cards("2c3c4c").unwrap()).is_ok());
        assert!(check_board(&parse_cards("2c3c4c5c6c").unwrap()).is_ok());
        assert_eq!(
            check_board(&parse_cards("2c3c").unwrap()),
            Err(EquityError::InvalidBoardSize(2))
        );
        assert_eq!(
            check_board(&parse_cards("2c3c4c5c6c7c").unwrap()),
            Err(EquityError::InvalidBoardSize(6))
        );
    }

    #[test]
    fn test_check_distinct() {
        let hole = parse_cards("AhKh").unwrap();
        assert!(check_distinct(&hole, &parse_cards("2c3c4c").unwrap()).is_ok());
        let ace = parse_cards("Ah").unwrap()[0];
        assert_eq!(
            check_distinct(&hole, &parse_cards("2cAh4c").unwrap()),
            Err(EquityError::DuplicateCard(ace))
        );
    }
}
