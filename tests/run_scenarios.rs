//! End-to-end scenarios for a single run.
//!
//! These tests feed the orchestrator a level on its input stream and compare
//! the full game text it writes.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use creational_quest::orchestrator::{INVALID_LEVEL_MESSAGE, PROMPT};
use creational_quest::{
    run, Difficulty, EnemyKind, ItemStrategy, Outcome, PowerUp, RunConfig, RunError, Weapon,
};

/// Run the game with `input` on stdin and return the outcome and the output.
fn play(input: &str) -> (Outcome, String) {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let outcome = run(&mut reader, &mut out, &RunConfig::default()).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_level_two_transcript() {
    let (outcome, output) = play("2\n");

    let expected = format!(
        "{PROMPT}=== Level 2 ===\n\
         Current Level: 2\n\
         Difficulty: Medium\n\
         >> A wild Orc appears!\n\
         A brutish Orc wielding a massive axe.\n\
         Orc swings a massive axe!\n\
         >> Found a weapon!\n\
         Blocking with a shield!\n\
         >> Found a power-up!\n\
         Replenishing mana with a potion!\n\
         >> Level 2 Complete!\n\
         \n\
         === Congratulations! You completed the chosen level! ===\n"
    );
    assert_eq!(output, expected);

    match outcome {
        Outcome::Completed(report) => {
            assert_eq!(report.level.get(), 2);
            assert_eq!(report.difficulty, Difficulty::Medium);
            assert_eq!(report.enemy, EnemyKind::Orc);
            assert_eq!(report.weapon, Weapon::Shield);
            assert_eq!(report.power_up, PowerUp::ManaPotion);
        }
        Outcome::InvalidLevel(n) => panic!("level 2 rejected as {n}"),
    }
}

#[test]
fn test_level_one_uses_advanced_items() {
    let (outcome, output) = play("1\n");

    assert!(output.contains("Difficulty: Easy\n"));
    assert!(output.contains(">> A wild Goblin appears!\n"));
    assert!(output.contains("A mischievous Goblin armed with a club.\n"));
    assert!(output.contains("Goblin attacks with a club!\n"));
    assert!(output.contains(">> Found a weapon!\nSwinging a sword!\n"));
    assert!(output.contains(">> Found a power-up!\nRestoring health with a potion!\n"));

    let Outcome::Completed(report) = outcome else {
        panic!("level 1 was rejected");
    };
    assert_eq!(report.strategy, ItemStrategy::Advanced);
}

#[test]
fn test_level_three_spawns_dragon() {
    let (_, output) = play("3\n");

    assert!(output.contains("Current Level: 3\n"));
    assert!(output.contains("Difficulty: Hard\n"));
    assert!(output.contains(">> A wild Dragon appears!\n"));
    assert!(output.contains("A fearsome Dragon that scorches everything in its path.\n"));
    assert!(output.contains("Dragon breathes fire!\n"));
    assert!(output.contains("Blocking with a shield!\n"));
    assert!(output.contains("Replenishing mana with a potion!\n"));
    assert!(output.ends_with(">> Level 3 Complete!\n\n=== Congratulations! You completed the chosen level! ===\n"));
}

#[test]
fn test_level_five_is_rejected() {
    let (outcome, output) = play("5\n");

    assert_eq!(outcome, Outcome::InvalidLevel(5));
    assert_eq!(output, format!("{PROMPT}{INVALID_LEVEL_MESSAGE}\n"));
}

#[test]
fn test_negative_and_zero_levels_are_rejected() {
    for input in ["0\n", "-1\n", "4\n", "2147483647\n", "-2147483648\n"] {
        let (outcome, output) = play(input);
        assert!(matches!(outcome, Outcome::InvalidLevel(_)), "input {input:?}");
        assert_eq!(output, format!("{PROMPT}{INVALID_LEVEL_MESSAGE}\n"));
    }
}

#[test]
fn test_input_without_newline() {
    let (outcome, _) = play("2");
    assert!(matches!(outcome, Outcome::Completed(_)));
}

#[test]
fn test_non_numeric_input_is_an_error() {
    let mut reader = Cursor::new(b"level two\n".to_vec());
    let mut out = Vec::new();
    let result = run(&mut reader, &mut out, &RunConfig::default());

    assert!(matches!(result, Err(RunError::InvalidInput(ref token)) if token == "level"));
    assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
}

#[test]
fn test_number_beyond_i32_is_an_error() {
    for token in ["2147483648", "99999999999"] {
        let mut reader = Cursor::new(format!("{token}\n").into_bytes());
        let mut out = Vec::new();
        let result = run(&mut reader, &mut out, &RunConfig::default());

        assert!(
            matches!(result, Err(RunError::InvalidInput(ref t)) if t == token),
            "input {token:?}"
        );
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }
}
