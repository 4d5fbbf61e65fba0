use std::ops::Range;

use log::debug;

use super::levels::{evaluate, score_with_board};
use super::outcome::{Outcome, Tally};
use super::workers::map_partitions;
use super::{check_board, check_distinct, check_hole, EquityError};
use crate::cards::{combinations, Card, Deck};
use crate::config::EngineConfig;
use crate::constants::BOARD_CARDS;

/// Exact outcome of `hole` against one random opponent once the board is
/// dealt out to the river
///
/// Uses the worker count from `EngineConfig::from_env`.
///
/// # Example
/// ```
/// use parrot_poker::cards::parse_cards;
/// use parrot_poker::equity_calculator::future_outcomes;
/// let hole = parse_cards("AsAd").unwrap();
/// let board = parse_cards("AhAc2d7s").unwrap();
/// let outcome = future_outcomes(&hole, &board).unwrap();
/// assert!(outcome.win > 0.99);
/// ```
pub fn future_outcomes(hole: &[Card], board: &[Card]) -> Result<Outcome, EquityError> {
    future_outcomes_with_threads(hole, board, EngineConfig::from_env().n_threads)
}

/// Enumerates every completion of the board and every opponent hole
///
/// # Arguments
///
/// * `hole` The 2 private cards
/// * `board` 3 to 5 public cards
/// * `n_threads` Number of threads to split the completions over
pub fn future_outcomes_with_threads(
    hole: &[Card],
    board: &[Card],
    n_threads: usize,
) -> Result<Outcome, EquityError> {
    check_hole(hole)?;
    if board.is_empty() {
        return Err(EquityError::EmptyBoard);
    }
    check_board(board)?;
    check_distinct(hole, board)?;

    let mut deck = Deck::new();
    deck.remove(hole);
    deck.remove(board);
    let completions = combinations(deck.cards(), BOARD_CARDS - board.len());

    let deck = &deck;
    let completions = &completions;
    let enumerate = |id: usize, range: Range<usize>| -> Result<Tally, EquityError> {
        debug!("future worker {} takes completions {:?}", id, range);
        let mut full_board = [board[0]; BOARD_CARDS];
        full_board[..board.len()].copy_from_slice(board);
        let mut tally = Tally::default();
        for completion in &completions[range] {
            full_board[board.len()..].copy_from_slice(completion);
            let mut pool = Deck::from_cards(deck.cards().to_vec());
            pool.remove(completion);

            let ours = score_with_board(hole, &full_board)?;
            for level in evaluate(pool.cards(), &full_board)? {
                tally.record(level.score().cmp(&ours), level.len() as u64);
            }
        }
        Ok(tally)
    };
    let tallies = map_partitions(completions.len(), n_threads, enumerate)?;

    let mut total = Tally::default();
    for tally in tallies {
        total += tally?;
    }
    Ok(total.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::equity_calculator::current_order;

    fn assert_sums_to_one(outcome: &Outcome) {
        assert!((outcome.win + outcome.tie + outcome.lose - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_river_matches_current_order() {
        let hole = parse_cards("QhJh").unwrap();
        let board = parse_cards("2c7dKs9h4d").unwrap();
        let outcome = future_outcomes_with_threads(&hole, &board, 3).unwrap();
        let expected = current_order(&hole, &board).unwrap().tally.outcome();
        assert_eq!(outcome, expected);
    }

    #[test]
    fn test_turn() {
        let hole = parse_cards("QhJh").unwrap();
        let board = parse_cards("2c7dKsTh").unwrap();
        let outcome = future_outcomes_with_threads(&hole, &board, 2).unwrap();
        assert_sums_to_one(&outcome);
        assert!(outcome.win > 0.0 && outcome.lose > 0.0);
    }

    #[test]
    fn test_thread_count_does_not_matter() {
        let hole = parse_cards("8s8c").unwrap();
        let board = parse_cards("2c7dKs9h").unwrap();
        let one = future_outcomes_with_threads(&hole, &board, 1).unwrap();
        let many = future_outcomes_with_threads(&hole, &board, 5).unwrap();
        assert_eq!(one, many);
    }

    #[test]
    fn test_flop() {
        let hole = parse_cards("AsAd").unwrap();
        let board = parse_cards("7h8c2d").unwrap();
        let outcome = future_outcomes_with_threads(&hole, &board, 4).unwrap();
        assert_sums_to_one(&outcome);
        assert!(outcome.win > 0.7);
    }

    #[test]
    fn test_royal_board_always_ties() {
        let hole = parse_cards("2c3d").unwrap();
        let board = parse_cards("AhKhQhJhTh").unwrap();
        let outcome = future_outcomes_with_threads(&hole, &board, 2).unwrap();
        assert_eq!(outcome.tie, 1.0);
    }

    #[test]
    fn test_invalid_input() {
        let hole = parse_cards("QhJh").unwrap();
        assert_eq!(
            future_outcomes_with_threads(&hole, &[], 2),
            Err(EquityError::EmptyBoard)
        );
        assert_eq!(
            future_outcomes_with_threads(&hole[..1], &parse_cards("2c7dKs").unwrap(), 2),
            Err(EquityError::InvalidHoleSize(1))
        );
        assert_eq!(
            future_outcomes_with_threads(&hole, &parse_cards("2c7d").unwrap(), 2),
            Err(EquityError::InvalidBoardSize(2))
        );
        assert_eq!(
            future_outcomes_with_threads(&hole, &parse_cards("2c7dKsQh").unwrap(), 2),
            Err(EquityError::DuplicateCard(hole[0]))
        );
    }
}
