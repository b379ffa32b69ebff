use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A 1-based card position outside `[1, count]`.
    #[error("Invalid card number!")]
    OutOfRange { position: usize, count: usize },
    /// A quiz summary over zero cards has no defined percentage.
    #[error("Cannot test on empty deck!")]
    EmptyQuiz,
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}
