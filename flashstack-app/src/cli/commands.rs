use crate::cli::console::{first_char, Console};
use crate::cli::opts::Cli;
use crate::cli::quiz::run_quiz;

use anyhow::Result;
use flashstack_core::{Card, CoreError, Deck};
use flashstack_text::StackFile;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const START_OPTIONS: &str = "- (N)ew stack
- (L)oad stack from file
- (Q)uit";

const DECK_OPTIONS: &str = "- (V)iew cards
- (A)dd card
- (D)elete card
- (E)dit card
- (M)ove card
- (T)est yourself
- (S)ave cards
- (Q)uit";

const SELECT: &str = "Please select an option: ";

/// What the menu threads through every command.
#[derive(Debug, Default)]
pub struct Session {
    pub deck: Deck,
    /// `None` until the stack has been loaded from or saved to a file.
    pub path: Option<PathBuf>,
    pub backup: Option<PathBuf>,
}

impl Session {
    pub fn new(deck: Deck, path: Option<PathBuf>, backup: Option<PathBuf>) -> Self {
        Self { deck, path, backup }
    }

    fn stack_file(&self, path: &Path) -> StackFile {
        match &self.backup {
            Some(b) => StackFile::with_backup(path, b),
            None => StackFile::new(path),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    View,
    Add,
    Delete,
    Edit,
    Move,
    Test,
    Save,
    Quit,
}

impl Choice {
    fn parse(line: &str) -> Option<Self> {
        Some(match first_char(line)? {
            'v' => Choice::View,
            'a' => Choice::Add,
            'd' => Choice::Delete,
            'e' => Choice::Edit,
            'm' => Choice::Move,
            't' => Choice::Test,
            's' => Choice::Save,
            'q' => Choice::Quit,
            _ => return None,
        })
    }
}

pub fn run<R, W, G>(args: Cli, console: &mut Console<R, W>, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    match args.file {
        Some(path) => {
            let mut session = Session::new(Deck::new(), None, args.backup);
            session.deck = load(console, &session.stack_file(&path))?;
            session.path = Some(path);
            deck_menu(&mut session, console, rng)
        }
        None => start_menu(console, args.backup, rng),
    }
}

fn load<R: BufRead, W: Write>(console: &mut Console<R, W>, file: &StackFile) -> Result<Deck> {
    match file.try_load()? {
        Some(deck) => Ok(deck),
        None => {
            console.say("Invalid file name.  Defaulting to empty flashcard stack.")?;
            Ok(Deck::new())
        }
    }
}

pub fn start_menu<R, W, G>(
    console: &mut Console<R, W>,
    backup: Option<PathBuf>,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        console.say(START_OPTIONS)?;
        let Some(line) = console.read_line(SELECT)? else {
            return Ok(());
        };
        match first_char(&line) {
            Some('n') => {
                let mut session = Session::new(Deck::new(), None, backup);
                return deck_menu(&mut session, console, rng);
            }
            Some('l') => {
                let name = console.ask("Please input a file name: ")?;
                let path = PathBuf::from(name);
                let mut session = Session::new(Deck::new(), None, backup.clone());
                match load(console, &session.stack_file(&path)) {
                    Ok(deck) => {
                        session.deck = deck;
                        session.path = Some(path);
                        return deck_menu(&mut session, console, rng);
                    }
                    Err(e) => {
                        log::error!("load {}: {e:#}", path.display());
                        console.say(format!("Could not read {}: {e}", path.display()))?;
                    }
                }
            }
            Some('q') => return Ok(()),
            _ => console.say("Invalid input.  Please try again.")?,
        }
    }
}

pub fn deck_menu<R, W, G>(
    session: &mut Session,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say(DECK_OPTIONS)?;
    loop {
        let Some(line) = console.read_line(SELECT)? else {
            log::warn!("input closed, leaving without saving");
            return Ok(());
        };
        let Some(choice) = Choice::parse(&line) else {
            console.say(DECK_OPTIONS)?;
            continue;
        };
        log::debug!("command {choice:?}");
        match choice {
            Choice::View => view(session, console)?,
            Choice::Add => {
                let prompt = console.ask("Input an item: ")?;
                let answer = console.ask("Input an answer: ")?;
                session.deck.add(Card::new(prompt, answer));
            }
            Choice::Delete => {
                let prompt = "Which card do you want to delete?  Enter a card number: ";
                let Some(pos) = ask_position(console, prompt)? else {
                    continue;
                };
                if let Err(e) = session.deck.remove(pos) {
                    console.say(e)?;
                }
            }
            Choice::Edit => edit(session, console)?,
            Choice::Move => {
                let prompt = "Which card number do you want to move? ";
                let Some(from) = ask_position(console, prompt)? else {
                    continue;
                };
                let Some(to) = ask_position(console, "Where do you want to move it to? ")? else {
                    continue;
                };
                if let Err(e) = session.deck.move_card(from, to) {
                    console.say(e)?;
                }
            }
            Choice::Test => {
                if session.deck.is_empty() {
                    console.say(CoreError::EmptyQuiz)?;
                } else {
                    run_quiz(console, &session.deck, rng)?;
                }
            }
            Choice::Save => {
                save(session, console)?;
            }
            Choice::Quit => {
                // Unlike yes_or_no, an empty reply here means yes.
                let reply = console.read_line("Do you want to save this deck? (y/n) ")?;
                if reply.as_deref().and_then(first_char) == Some('n') {
                    return Ok(());
                }
                if save(session, console)? {
                    return Ok(());
                }
            }
        }
    }
}

fn view<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> Result<()> {
    if session.deck.is_empty() {
        return console.say("There are no cards in the stack yet!");
    }
    for row in session.deck.render() {
        let number = format!("{}.", row.index);
        console.say(format!("{:<6}{:<60}\t{}", number, row.prompt, row.answer))?;
    }
    Ok(())
}

fn edit<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    let prompt = "Which card do you want to edit?  Enter a card number: ";
    let Some(pos) = ask_position(console, prompt)? else {
        return Ok(());
    };
    if let Err(e) = session.deck.get(pos) {
        return console.say(e);
    }
    let answer = console.ask("What should its new answer be? ")?;
    let card = session.deck.edit_answer(pos, answer)?;
    let msg = format!("Answer for '{}' changed to '{}'", card.prompt, card.answer);
    console.say(msg)
}

/// Saves to the known path, asking for one first if there is none.
/// Returns whether the deck was written.
fn save<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<bool> {
    console.say("Saving file...")?;
    let path = match &session.path {
        Some(p) => p.clone(),
        None => {
            let name = console.ask("Which file do you want to save these flashcards as? ")?;
            if name.is_empty() {
                console.say("No file name given.")?;
                return Ok(false);
            }
            PathBuf::from(name)
        }
    };
    let file = session.stack_file(&path);
    match file.save(&session.deck) {
        Ok(()) => {
            session.path = Some(path);
            console.say("Done!")?;
            Ok(true)
        }
        Err(e) => {
            log::error!("save {}: {e:#}", file.path().display());
            console.say(format!("Could not save to {}: {e}", file.path().display()))?;
            if file.backup_path().is_file() {
                console.say(format!(
                    "The previous contents are kept in {}",
                    file.backup_path().display()
                ))?;
            }
            Ok(false)
        }
    }
}

/// Reads a card number. Non-numeric input abandons the command with a
/// message; zero and negative numbers come back as position 0, which every
/// deck operation rejects as out of range.
fn ask_position<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<usize>> {
    let line = console.ask(prompt)?;
    match line.trim().parse::<i64>() {
        Ok(n) => Ok(Some(usize::try_from(n).unwrap_or(0))),
        Err(_) => {
            console.say("Please enter a card number.")?;
            Ok(None)
        }
    }
}
