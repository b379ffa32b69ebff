use flashstack_core::{Card, CoreError, Deck, Row};

fn deck_of(prompts: &[&str]) -> Deck {
    prompts
        .iter()
        .map(|p| Card::new(*p, p.to_uppercase()))
        .collect()
}

fn prompts(deck: &Deck) -> Vec<&str> {
    deck.render().map(|r| r.prompt).collect()
}

#[test]
fn add_then_remove_restores_count() {
    let mut deck = deck_of(&["a", "b", "c"]);
    deck.add(Card::new("d", "D"));
    assert_eq!(deck.count(), 4);
    assert_eq!(deck.get(4).unwrap().prompt, "d");

    let removed = deck.remove(4).unwrap();
    assert_eq!(removed.prompt, "d");
    assert_eq!(deck.count(), 3);
}

#[test]
fn remove_shifts_later_cards_down() {
    let mut deck = deck_of(&["a", "b", "c"]);
    let removed = deck.remove(2).unwrap();
    assert_eq!(removed.prompt, "b");
    assert_eq!(deck.get(2).unwrap().prompt, "c");
    assert_eq!(prompts(&deck), ["a", "c"]);
}

#[test]
fn positions_are_one_based() {
    let deck = deck_of(&["a", "b"]);
    assert_eq!(deck.get(1).unwrap().prompt, "a");
    assert_eq!(deck.get(2).unwrap().prompt, "b");
    assert!(matches!(
        deck.get(0),
        Err(CoreError::OutOfRange { position: 0, count: 2 })
    ));
    assert!(matches!(
        deck.get(3),
        Err(CoreError::OutOfRange { position: 3, count: 2 })
    ));
}

#[test]
fn out_of_range_leaves_deck_untouched() {
    let mut deck = deck_of(&["a", "b", "c"]);
    let before = deck.clone();

    assert!(deck.remove(0).is_err());
    assert!(deck.remove(4).is_err());
    assert!(deck.edit_answer(9, "x").is_err());
    assert!(deck.move_card(1, 4).is_err());
    assert!(deck.move_card(0, 2).is_err());
    assert_eq!(deck, before);

    let mut empty = Deck::new();
    assert!(empty.remove(1).is_err());
    assert!(empty.get(1).is_err());
}

#[test]
fn edit_replaces_answer_only() {
    let mut deck = deck_of(&["dog"]);
    let card = deck.edit_answer(1, "perro").unwrap();
    assert_eq!(card, &Card::new("dog", "perro"));
    assert_eq!(deck.get(1).unwrap().answer, "perro");
}

#[test]
fn move_forward_then_back() {
    let mut deck = deck_of(&["a", "b", "c", "d"]);
    deck.move_card(1, 3).unwrap();
    assert_eq!(prompts(&deck), ["b", "c", "a", "d"]);
    deck.move_card(3, 1).unwrap();
    assert_eq!(prompts(&deck), ["a", "b", "c", "d"]);
}

#[test]
fn move_backward_then_forward() {
    let mut deck = deck_of(&["a", "b", "c", "d"]);
    deck.move_card(4, 2).unwrap();
    assert_eq!(prompts(&deck), ["a", "d", "b", "c"]);
    deck.move_card(2, 4).unwrap();
    assert_eq!(prompts(&deck), ["a", "b", "c", "d"]);
}

#[test]
fn move_to_last_position() {
    let mut deck = deck_of(&["a", "b", "c", "d"]);
    deck.move_card(1, 4).unwrap();
    assert_eq!(prompts(&deck), ["b", "c", "d", "a"]);
    deck.move_card(2, 2).unwrap();
    assert_eq!(prompts(&deck), ["b", "c", "d", "a"]);
}

#[test]
fn render_reflects_current_state() {
    let mut deck = deck_of(&["a", "b"]);
    let rows: Vec<Row> = deck.render().collect();
    assert_eq!(
        rows,
        [
            Row { index: 1, prompt: "a", answer: "A" },
            Row { index: 2, prompt: "b", answer: "B" },
        ]
    );

    deck.remove(1).unwrap();
    let rows: Vec<Row> = deck.render().collect();
    assert_eq!(rows, [Row { index: 1, prompt: "b", answer: "B" }]);
}

#[test]
fn snapshot_is_independent() {
    let deck = deck_of(&["b", "a"]);
    let mut copy = deck.snapshot();
    copy.reverse();
    assert_eq!(prompts(&deck), ["b", "a"]);
}
