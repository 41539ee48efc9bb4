use thiserror::Error;

/// Everything the evaluator, range expander and simulator can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("hand must have 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("range has no playable combos")]
    EmptyRange,

    #[error("cannot draw {requested} cards, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("simulation cancelled")]
    Cancelled,

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
