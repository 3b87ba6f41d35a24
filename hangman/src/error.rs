use std::io;

use thiserror::Error;

use crate::Status;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Problems with the game setup. These are fatal and surface before any
/// round starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("words must consist of ASCII letters only - {0:?} is not valid")]
    InvalidWord(String),
    #[error("the incorrect guess limit must be at least one")]
    ZeroLimit,
}

/// A guess handed to [`GameState::apply_guess`](crate::GameState::apply_guess)
/// without going through validation first.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidGuessError {
    #[error("guesses must be a single ASCII letter - {0:?} is not valid")]
    NotALetter(char),
    #[error("guesses must be unique - {0} has already been guessed")]
    AlreadyGuessed(char),
    #[error("the round is already over ({0:?})")]
    RoundOver(Status),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidGuess(#[from] InvalidGuessError),
    #[error("console i/o failed")]
    Io(#[from] io::Error),
}
