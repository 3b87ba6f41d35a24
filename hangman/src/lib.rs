//! Core rules for a single-player game of hangman.
//!
//! [`GameState`] owns one round and only changes through
//! [`GameState::apply_guess`]. Raw player input goes through
//! [`validate_guess`] and [`parse_replay`] first, and [`Session`] drives
//! whole rounds against a [`Prompt`] and a [`Render`] supplied by the caller.

mod error;
mod game;
mod guess;
mod session;
mod words;

pub use error::{ConfigError, Error, InvalidGuessError, Result};
pub use game::{GameState, GuessOutcome, Outcome, Rules, Status, MAX_INCORRECT};
pub use guess::{parse_replay, validate_guess, GuessError, ReplyError};
pub use session::{ask_replay, read_guess, Prompt, Render, Session};
pub use words::{normalize_words, WORDS};
