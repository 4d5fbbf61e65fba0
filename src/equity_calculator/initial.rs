use std::collections::HashMap;
use std::ops::Range;

use log::{debug, info};

use super::levels::{evaluate, Level};
use super::outcome::{Outcome, Tally};
use super::outcome_table::OutcomeTable;
use super::workers::map_partitions;
use super::{check_hole, EquityError};
use crate::cards::{combinations, get_key, Card, Deck, Key};
use crate::config::EngineConfig;
use crate::constants::{BOARD_CARDS, CARD_COUNT};

// boards between progress messages
const PROGRESS_INTERVAL: usize = 10_000;

lazy_static! {
    static ref INITIAL_OUTCOMES: Result<OutcomeTable, EquityError> =
        load_initial_outcomes(&EngineConfig::from_env());
}

/// Preflop outcome of `hole` from the precomputed table
///
/// The table is read once, from `PARROT_OUTCOMES` or the default path, on
/// the first call. A missing or malformed table fails every call.
pub fn initial_outcomes(hole: &[Card]) -> Result<Outcome, EquityError> {
    check_hole(hole)?;
    lookup_loaded(&INITIAL_OUTCOMES, hole)
}

fn load_initial_outcomes(config: &EngineConfig) -> Result<OutcomeTable, EquityError> {
    OutcomeTable::load(&config.outcome_table_path)
}

// a failed load is handed to every caller
fn lookup_loaded(
    loaded: &Result<OutcomeTable, EquityError>,
    hole: &[Card],
) -> Result<Outcome, EquityError> {
    match loaded {
        Ok(table) => table.lookup(hole),
        Err(e) => Err(e.clone()),
    }
}

/// Enumerates every board and every pair of holes and writes the table to
/// `config.outcome_table_path`
///
/// This walks all 2,598,960 boards, expect it to take a while.
pub fn precompute_initial_outcomes(config: &EngineConfig) -> Result<(), EquityError> {
    let table = compute_initial_outcomes(config.n_threads)?;
    table.save(&config.outcome_table_path)
}

/// Preflop outcomes of all 1326 holes against one random opponent
pub fn compute_initial_outcomes(n_threads: usize) -> Result<OutcomeTable, EquityError> {
    compute_initial_outcomes_over(Deck::new().cards(), n_threads)
}

/// Preflop outcomes of every hole dealt from `universe`
///
/// Every 5 card board of the universe is dealt, and each hole is compared
/// with every opponent hole that shares no card with it.
///
/// # Arguments
///
/// * `universe` Distinct cards to deal from
/// * `n_threads` Number of threads to split the boards over
pub fn compute_initial_outcomes_over(
    universe: &[Card],
    n_threads: usize,
) -> Result<OutcomeTable, EquityError> {
    let boards = combinations(universe, BOARD_CARDS);
    info!(
        "enumerating {} boards over {} cards on {} threads",
        boards.len(),
        universe.len(),
        n_threads
    );

    let boards = &boards;
    let enumerate = |id: usize, range: Range<usize>| -> Result<HashMap<Key, Tally>, EquityError> {
        debug!("initial worker {} takes boards {:?}", id, range);
        let mut tallies = HashMap::new();
        for (done, board) in boards[range].iter().enumerate() {
            let mut pool = Deck::from_cards(universe.to_vec());
            pool.remove(board);
            let levels = evaluate(pool.cards(), board)?;
            tally_board(&levels, &mut tallies)?;
            if (done + 1) % PROGRESS_INTERVAL == 0 {
                debug!("initial worker {} finished {} boards", id, done + 1);
            }
        }
        Ok(tallies)
    };
    let partials = map_partitions(boards.len(), n_threads, enumerate)?;

    let mut tallies: HashMap<Key, Tally> = HashMap::new();
    for partial in partials {
        for (key, tally) in partial? {
            *tallies.entry(key).or_default() += tally;
        }
    }
    info!("finished {} boards, {} holes", boards.len(), tallies.len());
    Ok(OutcomeTable::from_tallies(tallies))
}

/// Adds one board to the tally of every hole in `levels`
///
/// Opponents sharing a card with the hole can't be dealt alongside it. They
/// are subtracted per card instead of compared pair by pair: no opponent
/// holds both cards except the hole itself, which sits in its own level.
fn tally_board(levels: &[Level], tallies: &mut HashMap<Key, Tally>) -> Result<(), EquityError> {
    let n_cards = CARD_COUNT as usize;
    let mut all_cards = vec![0u64; n_cards];
    let mut all_holes = 0u64;
    for level in levels {
        all_holes += level.len() as u64;
        for card in level.holes().iter().flatten() {
            all_cards[card.index()] += 1;
        }
    }

    let mut above_cards = vec![0u64; n_cards];
    let mut above_holes = 0u64;
    for level in levels {
        let mut level_cards = vec![0u64; n_cards];
        for card in level.holes().iter().flatten() {
            level_cards[card.index()] += 1;
        }
        let level_holes = level.len() as u64;

        for hole in level.holes() {
            let (a, b) = (hole[0].index(), hole[1].index());
            let better = above_holes - above_cards[a] - above_cards[b];
            let same = level_holes - level_cards[a] - level_cards[b] + 1;
            let total = all_holes - all_cards[a] - all_cards[b] + 1;
            *tallies.entry(get_key(hole)?).or_default() += Tally {
                better,
                same,
                worse: total - better - same,
                total,
            };
        }

        above_holes += level_holes;
        for (above, here) in above_cards.iter_mut().zip(&level_cards) {
            *above += here;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::config::OUTCOMES_ENV;
    use crate::equity_calculator::levels::score_with_board;
    use std::path::PathBuf;

    fn universe() -> Vec<Card> {
        parse_cards("AsAhKsKhQsQhJsTs9s2c").unwrap()
    }

    // compares every pair of disjoint holes directly
    fn brute_force(universe: &[Card]) -> HashMap<Key, Tally> {
        let mut tallies: HashMap<Key, Tally> = HashMap::new();
        for board in combinations(universe, BOARD_CARDS) {
            let rest: Vec<Card> = universe
                .iter()
                .copied()
                .filter(|c| !board.contains(c))
                .collect();
            let holes = combinations(&rest, 2);
            for hole in &holes {
                let ours = score_with_board(hole, &board).unwrap();
                let tally = tallies.entry(get_key(hole).unwrap()).or_default();
                for opponent in &holes {
                    if opponent.iter().any(|c| hole.contains(c)) {
                        continue;
                    }
                    let theirs = score_with_board(opponent, &board).unwrap();
                    tally.record(theirs.cmp(&ours), 1);
                }
            }
        }
        tallies
    }

    #[test]
    fn test_matches_brute_force() {
        let universe = universe();
        let expected = OutcomeTable::from_tallies(brute_force(&universe));
        let table = compute_initial_outcomes_over(&universe, 3).unwrap();
        assert_eq!(table.len(), 45);
        for (key, outcome) in expected.iter() {
            let got = table.get(key).unwrap();
            assert!((got.win - outcome.win).abs() < 1e-12, "{}", key);
            assert!((got.tie - outcome.tie).abs() < 1e-12, "{}", key);
            assert!((got.lose - outcome.lose).abs() < 1e-12, "{}", key);
        }
    }

    #[test]
    fn test_tally_board_counts_disjoint_opponents() {
        let board = parse_cards("2c7dKs9h4d").unwrap();
        let mut deck = Deck::new();
        deck.remove(&board);
        let levels = evaluate(deck.cards(), &board).unwrap();
        let mut tallies = HashMap::new();
        tally_board(&levels, &mut tallies).unwrap();

        assert_eq!(tallies.len(), 1081);
        for tally in tallies.values() {
            // opponents come from the 45 cards left after board and hole
            assert_eq!(tally.total, 990);
            assert_eq!(tally.better + tally.same + tally.worse, tally.total);
        }
    }

    #[test]
    fn test_tally_board_matches_current_order() {
        let board = parse_cards("2c7dKs9h4d").unwrap();
        let mut deck = Deck::new();
        deck.remove(&board);
        let levels = evaluate(deck.cards(), &board).unwrap();
        let mut tallies = HashMap::new();
        tally_board(&levels, &mut tallies).unwrap();

        for hole in &["QhJh", "KhKd", "3c5s", "AsAd"] {
            let hole = parse_cards(hole).unwrap();
            let order = crate::equity_calculator::current_order(&hole, &board).unwrap();
            assert_eq!(tallies[&get_key(&hole).unwrap()], order.tally);
        }
    }

    #[test]
    fn test_thread_count_does_not_matter() {
        let universe = universe();
        assert_eq!(
            compute_initial_outcomes_over(&universe, 1).unwrap(),
            compute_initial_outcomes_over(&universe, 7).unwrap()
        );
    }

    #[test]
    fn test_tiny_universe() {
        // a board leaves one card, not enough for a hole
        let universe = parse_cards("AsAhKsKhQs2c").unwrap();
        assert!(compute_initial_outcomes_over(&universe, 2).unwrap().is_empty());
    }

    #[test]
    fn test_saved_table_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("parrot_poker_initial_{}", std::process::id()))
            .join("outcomes");
        let universe = universe();
        let table = compute_initial_outcomes_over(&universe, 2).unwrap();
        table.save(&path).unwrap();
        let loaded = OutcomeTable::load(&path).unwrap();
        let hole = parse_cards("AsAh").unwrap();
        assert_eq!(loaded.lookup(&hole).unwrap(), table.lookup(&hole).unwrap());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_initial_outcomes_checks_hole() {
        let cards = parse_cards("AsAhKs").unwrap();
        assert_eq!(
            initial_outcomes(&cards),
            Err(EquityError::InvalidHoleSize(3))
        );
    }

    #[test]
    fn test_initial_outcomes_reads_table_once() {
        let path = std::env::temp_dir()
            .join(format!("parrot_poker_global_{}", std::process::id()))
            .join("initial_outcomes");
        let table = compute_initial_outcomes_over(&universe(), 2).unwrap();
        table.save(&path).unwrap();
        // the only test that touches the process wide table
        std::env::set_var(OUTCOMES_ENV, &path);

        let hole = parse_cards("KsAh").unwrap();
        let first = initial_outcomes(&hole).unwrap();
        assert_eq!(first, table.lookup(&hole).unwrap());

        // already in memory, the file is not read again
        std::fs::remove_file(&path).unwrap();
        assert_eq!(initial_outcomes(&hole).unwrap(), first);
        assert_eq!(initial_outcomes(&parse_cards("AhKs").unwrap()).unwrap(), first);

        let absent = parse_cards("2d3d").unwrap();
        assert_eq!(
            initial_outcomes(&absent),
            Err(EquityError::OutcomeNotFound(get_key(&absent).unwrap()))
        );
    }

    #[test]
    fn test_missing_table_fails_every_lookup() {
        let config = EngineConfig {
            n_threads: 1,
            outcome_table_path: PathBuf::from("/nonexistent/parrot_poker/initial_outcomes"),
        };
        let loaded = load_initial_outcomes(&config);
        let hole = parse_cards("AsAh").unwrap();
        let first = lookup_loaded(&loaded, &hole);
        match &first {
            Err(EquityError::CacheUnavailable { path, .. }) => {
                assert_eq!(path, "/nonexistent/parrot_poker/initial_outcomes")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(lookup_loaded(&loaded, &parse_cards("KsKh").unwrap()), first);
    }
}
