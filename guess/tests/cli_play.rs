//! CLI tests for the `guess` binary.
//!
//! Spawns the binary with scripted stdin and verifies transcripts and exit
//! codes. Seeded runs are predicted with the library's own RNG path.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use guess::core::difficulty::Difficulty;
use guess::exit_codes;
use guess::test_support::config_fixture;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_guess(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guess"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn guess");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("guess output")
}

fn seeded_secret(difficulty: Difficulty, seed: u64) -> i64 {
    let mut rng = StdRng::seed_from_u64(seed);
    difficulty.new_game(&mut rng).expect("game").secret()
}

#[test]
fn quit_exits_cleanly_without_reveal() {
    let output = run_guess(&["--difficulty", "easy"], "Q\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.starts_with("Guess the number between 1 and 10 - difficulty: easy\n"));
    assert!(stdout.ends_with("Goodbye.\n"));
    assert!(!stdout.contains("the number was"));
}

#[test]
fn seeded_game_can_be_won_first_try() {
    let secret = seeded_secret(Difficulty::Hard, 42);
    let output = run_guess(&["-d", "hard", "--seed", "42"], &format!("{secret}\n"));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.contains("Attempt 1/15"));
    assert!(stdout.ends_with("Correct! You found it in 1 attempt.\n"));
}

#[test]
fn default_difficulty_is_medium() {
    let secret = seeded_secret(Difficulty::Medium, 3);
    let output = run_guess(&["--seed", "3"], &format!("abc\n1000\n{secret}\n"));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Guess the number between 1 and 100 - difficulty: medium\n"));
    assert!(stdout.contains("Please enter an integer."));
    assert!(stdout.contains("Please enter a number between 1 and 100."));
    assert!(stdout.ends_with("Correct! You found it in 1 attempt.\n"));
}

#[test]
fn running_out_of_attempts_reveals_secret() {
    let secret = seeded_secret(Difficulty::Easy, 11);
    let wrong = if secret == 1 { 2 } else { 1 };
    let script = format!("{wrong}\n").repeat(5);
    let output = run_guess(&["-d", "easy", "--seed", "11"], &script);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.contains("Attempt 5/5"));
    assert!(stdout.ends_with(&format!("Game over - the number was {secret}.\n")));
}

#[test]
fn config_file_supplies_difficulty_and_seed() {
    let (_dir, path) = config_fixture("difficulty = \"easy\"\nseed = 7\n").expect("fixture");
    let secret = seeded_secret(Difficulty::Easy, 7);
    let path = path.to_string_lossy().into_owned();
    let output = run_guess(&["--config", path.as_str()], &format!("{secret}\n"));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.starts_with("Guess the number between 1 and 10 - difficulty: easy\n"));
    assert!(stdout.ends_with("Correct! You found it in 1 attempt.\n"));
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let (_dir, path) = config_fixture("difficulty = 3\n").expect("fixture");
    let path = path.to_string_lossy().into_owned();
    let output = run_guess(&["-c", path.as_str()], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr.contains("guess.toml"));
    assert!(output.stdout.is_empty());
}
