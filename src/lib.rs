//! # Parrot Poker
//! Exact texas holdem hand scoring and equity enumeration
//!
//! Currently supports
//!  - scoring the best 5 card hand out of 5, 6 or 7 cards
//!  - ranking a hole against every opponent hole on a board
//!  - exact outcomes against one random opponent from the flop or turn
//!  - a precomputed table of preflop outcomes for all 1326 holes
//!
//! ## Hand Evaluator
//!
//! ```
//! use parrot_poker::cards::parse_cards;
//! use parrot_poker::hand_evaluator::{score, HandCategory};
//! let s = score(&parse_cards("TdAdQdKdJd").unwrap()).unwrap();
//! assert_eq!(s.category(), HandCategory::StraightFlush);
//! ```
//!
//! ## Equity Calculator
//!
//! ```
//! use parrot_poker::cards::parse_cards;
//! use parrot_poker::equity_calculator::future_outcomes_with_threads;
//! let hole = parse_cards("QhJh").unwrap();
//! let board = parse_cards("2c7dKsTh").unwrap();
//! let n_threads = 4;
//! let outcome = future_outcomes_with_threads(&hole, &board, n_threads).unwrap();
//! assert!((outcome.win + outcome.tie + outcome.lose - 1.0).abs() < 1e-9);
//! ```

#[macro_use]
extern crate lazy_static;

pub use read_write;

pub mod cards;
pub mod config;
pub mod constants;
pub mod hand_evaluator;

pub mod equity_calculator;
