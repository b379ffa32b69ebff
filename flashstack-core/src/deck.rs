use crate::{Card, CoreError};

/// An ordered stack of cards addressed by 1-based position.
///
/// Insertion order is the display and save order. Every mutating operation
/// validates its positions first and leaves the deck untouched on error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// One rendered line of a deck listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub index: usize,
    pub prompt: &'a str,
    pub answer: &'a str,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, position: usize) -> Result<&Card, CoreError> {
        let idx = self.index_of(position)?;
        Ok(&self.cards[idx])
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove(&mut self, position: usize) -> Result<Card, CoreError> {
        let idx = self.index_of(position)?;
        Ok(self.cards.remove(idx))
    }

    /// Replaces the answer of the card at `position`. The prompt is never edited.
    pub fn edit_answer(
        &mut self,
        position: usize,
        answer: impl Into<String>,
    ) -> Result<&Card, CoreError> {
        let idx = self.index_of(position)?;
        let card = &mut self.cards[idx];
        card.answer = answer.into();
        Ok(card)
    }

    /// Removes the card at `from` and reinserts it at `to`, where `to` is
    /// measured in the list after the removal.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        let src = self.index_of(from)?;
        let dst = self.index_of(to)?;
        let card = self.cards.remove(src);
        self.cards.insert(dst, card);
        Ok(())
    }

    /// Lists the current cards as 1-based rows. Each call reflects the deck as
    /// it is now.
    pub fn render(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.cards.iter().enumerate().map(|(i, c)| Row {
            index: i + 1,
            prompt: &c.prompt,
            answer: &c.answer,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Owned copy of the cards, for working lists that get reordered.
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    fn index_of(&self, position: usize) -> Result<usize, CoreError> {
        if position == 0 || position > self.cards.len() {
            return Err(CoreError::OutOfRange {
                position,
                count: self.cards.len(),
            });
        }
        Ok(position - 1)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

