use flashstack_core::{Card, Deck, Row};
use flashstack_text::StackFile;
use std::fs;

fn sample() -> Deck {
    [
        Card::new("dog", "perro"),
        Card::new("to be", "ser, estar"),
        Card::new("", "empty prompt"),
        Card::new("no answer", ""),
    ]
    .into_iter()
    .collect()
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let file = StackFile::new(dir.path().join("spanish.txt"));
    let deck = sample();

    file.save(&deck).unwrap();
    let loaded = file.load().unwrap();

    let a: Vec<Row> = deck.render().collect();
    let b: Vec<Row> = loaded.render().collect();
    assert_eq!(a, b);
    assert!(!file.backup_path().exists());
}

#[test]
fn comment_line_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.txt");
    fs::write(&path, "# comment\na\tb\n").unwrap();

    let deck = StackFile::new(&path).load().unwrap();
    assert_eq!(deck.count(), 1);
    assert_eq!(deck.get(1).unwrap(), &Card::new("a", "b"));
}

#[test]
fn missing_file_is_an_empty_deck() {
    let dir = tempfile::tempdir().unwrap();
    let file = StackFile::new(dir.path().join("nope.txt"));

    assert!(file.try_load().unwrap().is_none());
    assert_eq!(file.load().unwrap().count(), 0);
}

#[test]
fn directory_is_treated_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let file = StackFile::new(dir.path());
    assert!(file.try_load().unwrap().is_none());
}

#[test]
fn save_drops_comments_and_rewrites_fully() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.txt");
    fs::write(&path, "# header\nold\tstuff\nbroken line\nkeep\tme\n").unwrap();

    let file = StackFile::new(&path);
    let mut deck = file.load().unwrap();
    deck.remove(1).unwrap();
    deck.add(Card::new("new", "card"));
    file.save(&deck).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\tme\nnew\tcard\n");
    assert!(!file.backup_path().exists());
}

#[test]
fn custom_backup_location_is_used_and_cleaned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.txt");
    let backup = dir.path().join("saved-copy");
    fs::write(&path, "a\tb\n").unwrap();

    let file = StackFile::with_backup(&path, &backup);
    assert_eq!(file.backup_path(), backup.as_path());
    file.save(&Deck::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(!backup.exists());
}
