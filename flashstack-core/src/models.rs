/// A prompt/answer pair. Cards have no identity beyond their position in a
/// [`Deck`](crate::Deck).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub prompt: String,
    pub answer: String,
}

impl Card {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Returns `(shown, expected)` for a quiz asked in `direction`.
    pub fn sides(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::Forward => (&self.prompt, &self.answer),
            Direction::Swapped => (&self.answer, &self.prompt),
        }
    }
}

/// Whether prompt and answer roles are swapped during a quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Swapped,
}

impl Direction {
    pub fn from_swapped(swapped: bool) -> Self {
        if swapped {
            Direction::Swapped
        } else {
            Direction::Forward
        }
    }

    /// Name of the side the user is asked to produce.
    pub fn expected_label(&self) -> &'static str {
        match self {
            Direction::Forward => "answer",
            Direction::Swapped => "item",
        }
    }
}
