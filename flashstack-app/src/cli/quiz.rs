use crate::cli::console::Console;
use anyhow::Result;
use flashstack_core::{Deck, Direction, QuizOrder, QuizSession, QuizSummary, Verdict};
use rand::Rng;
use std::io::{BufRead, Write};

/// Asks for the session options, runs every card once and prints the score.
pub fn run_quiz<R, W, G>(
    console: &mut Console<R, W>,
    deck: &Deck,
    rng: &mut G,
) -> Result<QuizSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    // Only one of shuffle/sort: the second question is skipped after a yes.
    let order = if console.yes_or_no("Do you want to be tested in a random order?")? {
        QuizOrder::Shuffled
    } else if console.yes_or_no("Do you want to be tested in alphabetical order?")? {
        QuizOrder::Alphabetical
    } else {
        QuizOrder::Deck
    };
    let direction =
        Direction::from_swapped(console.yes_or_no("Do you want to switch items and answers?")?);

    let mut quiz = QuizSession::new(deck.snapshot(), order, direction, rng);
    while let Some(q) = quiz.current() {
        let asked_for = q.asked_for;
        log::debug!("question {}/{}", q.number, q.total);
        console.say(format!("{} for {}", capitalize(asked_for), q.shown))?;
        let response = console.ask("")?;
        match quiz.answer(&response)? {
            Verdict::Correct => console.say("Correct!")?,
            Verdict::Incorrect { expected } => {
                console.say(format!("The correct {asked_for} was {expected}"))?;
                let claimed = console.yes_or_no("Did you answer correctly?")?;
                quiz.self_report(claimed)?;
            }
        }
    }

    let s = quiz.summary()?;
    console.say(format!(
        "You got {} out of {} correct, or {}%!",
        s.correct, s.total, s.percentage
    ))?;
    Ok(s)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
