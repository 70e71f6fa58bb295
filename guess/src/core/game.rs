//! Guess-the-number state machine.
//!
//! A [`Game`] owns the secret, the inclusive bounds, the attempt counter and
//! the outcome of the most recent guess. It performs no I/O; randomness is
//! always supplied by the caller so runs can be made deterministic.

use std::fmt;
use std::num::NonZeroU32;

use rand::Rng;
use thiserror::Error;

/// Result of a single accepted guess, relative to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess was below the secret.
    Low,
    /// The guess was above the secret.
    High,
    /// The guess matched the secret.
    Correct,
}

impl Outcome {
    /// Player-facing hint for a miss. `Correct` has no hint.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Outcome::Low => Some("Too low."),
            Outcome::High => Some("Too high."),
            Outcome::Correct => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Low => "low",
            Outcome::High => "high",
            Outcome::Correct => "correct",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("low must be < high (got low={low}, high={high})")]
    InvalidRange { low: i64, high: i64 },

    #[error("guess must be between {low} and {high} (got {value})")]
    OutOfRange { value: i64, low: i64, high: i64 },

    #[error("secret must be between {low} and {high} (got {secret})")]
    SecretOutOfRange { secret: i64, low: i64, high: i64 },

    #[error("game is already over")]
    GameOver,
}

/// Optional construction parameters for [`Game::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// Attempt ceiling. Defaults to `max(5, (high - low) / 10 + 5)`.
    pub max_attempts: Option<NonZeroU32>,
    /// Fixed secret. Drawn uniformly from `[low, high]` when absent.
    pub secret: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    low: i64,
    high: i64,
    secret: i64,
    attempts: u32,
    max_attempts: u32,
    last_result: Option<Outcome>,
}

impl Game {
    /// Create a game over the inclusive range `[low, high]`.
    ///
    /// `rng` is only consulted when `options.secret` is `None`.
    pub fn new<R: Rng + ?Sized>(
        low: i64,
        high: i64,
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if let Some(secret) = options.secret {
            return Self::with_secret(low, high, options.max_attempts, secret);
        }
        check_range(low, high)?;
        let secret = rng.gen_range(low..=high);
        Ok(Self::from_parts(low, high, options.max_attempts, secret))
    }

    /// Create a game with a known secret, without touching any RNG.
    pub fn with_secret(
        low: i64,
        high: i64,
        max_attempts: Option<NonZeroU32>,
        secret: i64,
    ) -> Result<Self, GameError> {
        check_range(low, high)?;
        let secret = check_secret(secret, low, high)?;
        Ok(Self::from_parts(low, high, max_attempts, secret))
    }

    fn from_parts(low: i64, high: i64, max_attempts: Option<NonZeroU32>, secret: i64) -> Self {
        let max_attempts = max_attempts
            .map(NonZeroU32::get)
            .unwrap_or_else(|| default_max_attempts(low, high));
        Self {
            low,
            high,
            secret,
            attempts: 0,
            max_attempts,
            last_result: None,
        }
    }

    /// Submit a guess.
    ///
    /// Rejected guesses (out of range, or after the game ended) leave the
    /// game untouched.
    pub fn guess(&mut self, value: i64) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if value < self.low || value > self.high {
            return Err(GameError::OutOfRange {
                value,
                low: self.low,
                high: self.high,
            });
        }
        self.attempts += 1;
        let outcome = match value.cmp(&self.secret) {
            std::cmp::Ordering::Equal => Outcome::Correct,
            std::cmp::Ordering::Less => Outcome::Low,
            std::cmp::Ordering::Greater => Outcome::High,
        };
        self.last_result = Some(outcome);
        Ok(outcome)
    }

    pub fn is_won(&self) -> bool {
        self.last_result == Some(Outcome::Correct)
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.attempts >= self.max_attempts
    }

    /// Start over with the same bounds and attempt ceiling.
    ///
    /// An explicit `secret` must lie within the bounds; on error nothing changes.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        secret: Option<i64>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.secret = match secret {
            Some(secret) => check_secret(secret, self.low, self.high)?,
            None => rng.gen_range(self.low..=self.high),
        };
        self.attempts = 0;
        self.last_result = None;
        Ok(())
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    pub fn last_result(&self) -> Option<Outcome> {
        self.last_result
    }
}

fn check_range(low: i64, high: i64) -> Result<(), GameError> {
    if low >= high {
        return Err(GameError::InvalidRange { low, high });
    }
    Ok(())
}

fn check_secret(secret: i64, low: i64, high: i64) -> Result<i64, GameError> {
    if secret < low || secret > high {
        return Err(GameError::SecretOutOfRange { secret, low, high });
    }
    Ok(secret)
}

/// `max(5, (high - low) / 10 + 5)`, saturating for very wide ranges.
fn default_max_attempts(low: i64, high: i64) -> u32 {
    let span = i128::from(high) - i128::from(low);
    let attempts = (span / 10 + 5).max(5);
    u32::try_from(attempts).unwrap_or(u32::MAX)
}
