use crate::{Card, CoreError, Direction, QuizSummary};
use rand::seq::SliceRandom;
use rand::Rng;

/// How the working list is ordered before the first question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizOrder {
    #[default]
    Deck,
    Shuffled,
    /// Stable sort by prompt, ordinal string comparison.
    Alphabetical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Asking,
    AwaitingReport,
    Finished,
}

/// The question currently put to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question<'a> {
    pub number: usize,
    pub total: usize,
    pub shown: &'a str,
    /// "answer" or "item", depending on direction.
    pub asked_for: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// The user may still claim the point through [`QuizSession::self_report`].
    Incorrect { expected: String },
}

/// A single pass over a snapshot of a deck.
///
/// The session owns its working list, so shuffling or sorting never reaches
/// the deck the cards were copied from.
pub struct QuizSession {
    cards: Vec<Card>,
    direction: Direction,
    cursor: usize,
    correct: u32,
    phase: Phase,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(
        mut cards: Vec<Card>,
        order: QuizOrder,
        direction: Direction,
        rng: &mut R,
    ) -> Self {
        match order {
            QuizOrder::Deck => {}
            QuizOrder::Shuffled => cards.shuffle(rng),
            QuizOrder::Alphabetical => cards.sort_by(|a, b| a.prompt.cmp(&b.prompt)),
        }
        log::debug!(
            "quiz over {} card(s), order={order:?}, direction={direction:?}",
            cards.len()
        );
        let phase = if cards.is_empty() {
            Phase::Finished
        } else {
            Phase::Asking
        };
        Self {
            cards,
            direction,
            cursor: 0,
            correct: 0,
            phase,
        }
    }

    /// Working list in question order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current(&self) -> Option<Question<'_>> {
        if self.is_finished() {
            return None;
        }
        let (shown, _) = self.cards[self.cursor].sides(self.direction);
        Some(Question {
            number: self.cursor + 1,
            total: self.cards.len(),
            shown,
            asked_for: self.direction.expected_label(),
        })
    }

    /// Grades `response` against the current card.
    ///
    /// Only the response is lowercased; the expected text is compared as
    /// stored, so a card whose expected side has capitals can never match
    /// exactly and always falls through to the self report.
    pub fn answer(&mut self, response: &str) -> Result<Verdict, CoreError> {
        match self.phase {
            Phase::Asking => {}
            Phase::AwaitingReport => return Err(CoreError::Invalid("self report pending")),
            Phase::Finished => return Err(CoreError::Invalid("quiz is finished")),
        }
        let (_, expected) = self.cards[self.cursor].sides(self.direction);
        if response.to_lowercase() == expected {
            self.correct += 1;
            self.advance();
            Ok(Verdict::Correct)
        } else {
            let expected = expected.to_string();
            self.phase = Phase::AwaitingReport;
            Ok(Verdict::Incorrect { expected })
        }
    }

    /// Settles a mismatched answer with the user's own judgement.
    pub fn self_report(&mut self, answered_correctly: bool) -> Result<(), CoreError> {
        if self.phase != Phase::AwaitingReport {
            return Err(CoreError::Invalid("no answer awaiting a self report"));
        }
        if answered_correctly {
            self.correct += 1;
        }
        self.advance();
        Ok(())
    }

    pub fn summary(&self) -> Result<QuizSummary, CoreError> {
        if !self.is_finished() {
            return Err(CoreError::Invalid("quiz still in progress"));
        }
        QuizSummary::from_counts(self.correct, self.cards.len() as u32)
    }

    fn advance(&mut self) {
        self.cursor += 1;
        self.phase = if self.cursor < self.cards.len() {
            Phase::Asking
        } else {
            Phase::Finished
        };
    }
}
