mod evaluator;
mod score;

use thiserror::Error;

pub use evaluator::score;
pub use score::{HandCategory, Score, HAND_CATEGORY_SHIFT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("only 5, 6 or 7 cards can be scored, got {0}")]
    InvalidHandSize(usize),
}
