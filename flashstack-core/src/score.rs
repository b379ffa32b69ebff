use crate::CoreError;

/// Final result of a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

impl QuizSummary {
    /// Fails with [`CoreError::EmptyQuiz`] when `total` is zero.
    pub fn from_counts(correct: u32, total: u32) -> Result<Self, CoreError> {
        if total == 0 {
            return Err(CoreError::EmptyQuiz);
        }
        Ok(Self {
            correct,
            total,
            percentage: percentage(correct, total),
        })
    }
}

// Halves round to even: 1 of 8 is 12%, 3 of 8 is 38%.
fn percentage(correct: u32, total: u32) -> u32 {
    let exact = 100.0 * f64::from(correct) / f64::from(total);
    exact.round_ties_even() as u32
}
