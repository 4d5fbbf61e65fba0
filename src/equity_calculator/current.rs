use super::levels::{evaluate, score_with_board, Level};
use super::outcome::Tally;
use super::{check_board, check_distinct, check_hole, EquityError};
use crate::cards::{Card, Deck};

/// Where a hole stands against every other hole on a fixed board
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentOrder {
    /// Opponent holes from the rest of the deck, best level first
    pub levels: Vec<Level>,
    /// Opponents that beat, tie or lose to the hole
    pub tally: Tally,
}

/// Ranks `hole` against every opponent hole dealt from the remaining deck
///
/// # Arguments
///
/// * `hole` The 2 private cards
/// * `board` 3 to 5 public cards
///
/// # Example
/// ```
/// use parrot_poker::cards::parse_cards;
/// use parrot_poker::equity_calculator::current_order;
/// let hole = parse_cards("AsAd").unwrap();
/// let board = parse_cards("AhAc2d7s9h").unwrap();
/// let order = current_order(&hole, &board).unwrap();
/// assert_eq!(order.tally.worse, 990);
/// ```
pub fn current_order(hole: &[Card], board: &[Card]) -> Result<CurrentOrder, EquityError> {
    check_hole(hole)?;
    check_board(board)?;
    check_distinct(hole, board)?;

    let mut deck = Deck::new();
    deck.remove(hole);
    deck.remove(board);

    let levels = evaluate(deck.cards(), board)?;
    let ours = score_with_board(hole, board)?;
    let mut tally = Tally::default();
    for level in &levels {
        tally.record(level.score().cmp(&ours), level.len() as u64);
    }
    Ok(CurrentOrder { levels, tally })
}
