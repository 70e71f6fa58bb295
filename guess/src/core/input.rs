//! Classification of raw player input lines.

/// One line of player input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// `q`, `quit` or `exit` (any case).
    Quit,
    Guess(i64),
    /// Not an integer. Never consumes an attempt.
    Invalid,
}

const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// Interpret a line typed by the player. Surrounding whitespace is ignored.
pub fn parse_input(line: &str) -> PlayerInput {
    let trimmed = line.trim();
    if QUIT_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return PlayerInput::Quit;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => PlayerInput::Guess(value),
        Err(_) => PlayerInput::Invalid,
    }
}
