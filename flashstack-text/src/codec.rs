//! Line format of a stack file.
//!
//! Each card is one line, `<prompt>\t<answer>\n`. Lines starting with `#` are
//! comments, lines without a tab are malformed; both are skipped on read and
//! never written back. Prompts and answers are not escaped: a tab or newline
//! inside either will not survive a save and reload.

use flashstack_core::{Card, Deck};

pub const DELIMITER: char = '\t';
pub const COMMENT: char = '#';

/// Parses one line (without its terminator). `None` for comments and
/// malformed lines.
pub fn parse_line(line: &str) -> Option<Card> {
    if line.starts_with(COMMENT) {
        return None;
    }
    let (prompt, answer) = line.split_once(DELIMITER)?;
    Some(Card::new(prompt, answer))
}

pub fn parse_stack(text: &str) -> Deck {
    let mut deck = Deck::new();
    // lines() drops both "\n" and "\r\n".
    for (n, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(card) => deck.add(card),
            None => log::debug!("skipping line {}: {:?}", n + 1, line),
        }
    }
    deck
}

pub fn render_stack(deck: &Deck) -> String {
    let mut out = String::new();
    for card in deck.cards() {
        out.push_str(&card.prompt);
        out.push(DELIMITER);
        out.push_str(&card.answer);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_malformed_lines_are_skipped() {
        let deck = parse_stack("# comment\na\tb\nno delimiter\n\n#x\ty\n");
        assert_eq!(deck.count(), 1);
        assert_eq!(deck.get(1).unwrap(), &Card::new("a", "b"));
    }

    #[test]
    fn splits_on_first_tab_only() {
        assert_eq!(parse_line("a\tb\tc"), Some(Card::new("a", "b\tc")));
        assert_eq!(parse_line("\tonly answer"), Some(Card::new("", "only answer")));
        assert_eq!(parse_line("prompt\t"), Some(Card::new("prompt", "")));
    }

    #[test]
    fn strips_crlf_terminators() {
        let deck = parse_stack("hola\thello\r\nadios\tgoodbye");
        assert_eq!(deck.get(1).unwrap().answer, "hello");
        assert_eq!(deck.get(2).unwrap().answer, "goodbye");
    }

    #[test]
    fn renders_one_line_per_card() {
        let deck: Deck = [Card::new("a", "b"), Card::new("c", "d")].into_iter().collect();
        assert_eq!(render_stack(&deck), "a\tb\nc\td\n");
        assert_eq!(render_stack(&Deck::new()), "");
    }
}
