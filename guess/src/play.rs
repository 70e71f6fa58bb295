//! Interactive session loop driving a [`Game`] over line-based I/O.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::difficulty::Difficulty;
use crate::core::game::{Game, GameError, Outcome};
use crate::core::input::{PlayerInput, parse_input};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The secret was found after `attempts` accepted guesses.
    Won { attempts: u32 },
    /// Attempts ran out; the secret was revealed.
    Lost { secret: i64 },
    /// The player quit or input ended. The secret stays hidden.
    Quit,
}

/// Play `game` to completion, reading guesses from `input` and writing
/// prompts and feedback to `output`.
///
/// End of input is treated like a quit.
pub fn play_session<R: BufRead, W: Write>(
    game: &mut Game,
    difficulty: Difficulty,
    mut input: R,
    mut output: W,
) -> Result<SessionOutcome> {
    info!(
        low = game.low(),
        high = game.high(),
        max_attempts = game.max_attempts(),
        %difficulty,
        "session started"
    );
    writeln!(
        output,
        "Guess the number between {} and {} - difficulty: {}",
        game.low(),
        game.high(),
        difficulty
    )
    .context("write banner")?;

    let mut buf = Vec::new();
    while !game.is_over() {
        write!(
            output,
            "Attempt {}/{} - your guess (or 'q' to quit): ",
            game.attempts() + 1,
            game.max_attempts()
        )
        .context("write prompt")?;
        output.flush().context("flush prompt")?;

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("read guess")?;
        if read == 0 {
            debug!("input closed");
            return quit(&mut output);
        }
        // Undecodable bytes become U+FFFD and classify as invalid input.
        let line = String::from_utf8_lossy(&buf);

        let value = match parse_input(&line) {
            PlayerInput::Quit => return quit(&mut output),
            PlayerInput::Invalid => {
                debug!(input = line.trim(), "rejected non-integer input");
                writeln!(output, "Please enter an integer.").context("write feedback")?;
                continue;
            }
            PlayerInput::Guess(value) => value,
        };

        match game.guess(value) {
            Ok(Outcome::Correct) => {
                let attempts = game.attempts();
                info!(attempts, "secret found");
                let noun = if attempts == 1 { "attempt" } else { "attempts" };
                writeln!(output, "Correct! You found it in {attempts} {noun}.")
                    .context("write feedback")?;
                return Ok(SessionOutcome::Won { attempts });
            }
            Ok(outcome) => {
                debug!(
                    attempt = game.attempts(),
                    remaining = game.remaining_attempts(),
                    %outcome,
                    "guess accepted"
                );
                if let Some(hint) = outcome.hint() {
                    writeln!(output, "{hint}").context("write feedback")?;
                }
            }
            Err(GameError::OutOfRange { value, low, high }) => {
                debug!(value, "rejected out-of-range guess");
                writeln!(output, "Please enter a number between {low} and {high}.")
                    .context("write feedback")?;
            }
            Err(err) => return Err(err).context("submit guess"),
        }
    }

    if game.is_won() {
        return Ok(SessionOutcome::Won {
            attempts: game.attempts(),
        });
    }
    info!(attempts = game.attempts(), "attempts exhausted");
    writeln!(output, "Game over - the number was {}.", game.secret())
        .context("write reveal")?;
    Ok(SessionOutcome::Lost {
        secret: game.secret(),
    })
}

fn quit<W: Write>(output: &mut W) -> Result<SessionOutcome> {
    writeln!(output, "Goodbye.").context("write farewell")?;
    Ok(SessionOutcome::Quit)
}
