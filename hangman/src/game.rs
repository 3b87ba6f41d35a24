use hashbrown::HashSet;
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, warn};

use crate::{normalize_words, ConfigError, InvalidGuessError};

/// Incorrect guesses allowed per round unless [`Rules`] say otherwise.
pub const MAX_INCORRECT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub max_incorrect: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_incorrect: MAX_INCORRECT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// What a single applied guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: char,
    pub outcome: Outcome,
    pub status: Status,
}

/// One round of hangman.
#[derive(Clone, Debug)]
pub struct GameState {
    word: String,
    guessed: HashSet<u8>,
    incorrect: usize,
    max_incorrect: usize,
    status: Status,
}

impl GameState {
    pub fn new<S: AsRef<str>>(words: &[S], rng: &mut impl Rng) -> Result<Self, ConfigError> {
        Self::with_rules(words, Rules::default(), rng)
    }

    pub fn with_rules<S: AsRef<str>>(
        words: &[S],
        rules: Rules,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if rules.max_incorrect == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        let words = normalize_words(words)?;
        let word = words
            .choose(rng)
            .ok_or(ConfigError::EmptyWordList)?
            .to_owned();

        debug!(
            length = word.len(),
            max_incorrect = rules.max_incorrect,
            "starting round"
        );

        Ok(Self {
            word,
            guessed: HashSet::new(),
            incorrect: 0,
            max_incorrect: rules.max_incorrect,
            status: Status::InProgress,
        })
    }

    /// Records a guess and advances the round.
    ///
    /// The letter is case-insensitive. It must be an ASCII letter that has
    /// not been guessed yet, and the round must still be in progress;
    /// otherwise the state is left untouched and an [`InvalidGuessError`] is
    /// returned.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome, InvalidGuessError> {
        if self.status.is_over() {
            return Err(self.reject(InvalidGuessError::RoundOver(self.status)));
        }

        if !letter.is_ascii_alphabetic() {
            return Err(self.reject(InvalidGuessError::NotALetter(letter)));
        }

        let guess = letter.to_ascii_uppercase() as u8;
        if !self.guessed.insert(guess) {
            return Err(self.reject(InvalidGuessError::AlreadyGuessed(guess as char)));
        }

        let outcome = if self.word.bytes().any(|u| u == guess) {
            if self.is_won() {
                self.status = Status::Won;
            }
            Outcome::Hit
        } else {
            self.incorrect += 1;
            if self.incorrect == self.max_incorrect {
                self.status = Status::Lost;
            }
            Outcome::Miss
        };

        debug!(
            letter = %(guess as char),
            ?outcome,
            incorrect = self.incorrect,
            status = ?self.status,
            "applied guess"
        );

        Ok(GuessOutcome {
            letter: guess as char,
            outcome,
            status: self.status,
        })
    }

    fn reject(&self, error: InvalidGuessError) -> InvalidGuessError {
        warn!(%error, "rejected unvalidated guess");
        error
    }

    fn is_won(&self) -> bool {
        self.word.bytes().all(|u| self.guessed.contains(&u))
    }

    /// The target word with unguessed letters shown as `_`, separated by
    /// spaces: `"_ A T"`.
    pub fn masked_word(&self) -> String {
        self.word
            .bytes()
            .map(|u| if self.guessed.contains(&u) { u } else { b'_' } as char)
            .flat_map(|c| [' ', c])
            .skip(1)
            .collect()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.max_incorrect - self.incorrect
    }

    pub fn target_word(&self) -> &str {
        &self.word
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<_> = self.guessed.iter().map(|&u| u as char).collect();
        letters.sort_unstable();
        letters
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    pub fn max_incorrect(&self) -> usize {
        self.max_incorrect
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Progress marker for the gallows art, `0..=max_incorrect`.
    pub fn stage(&self) -> usize {
        self.incorrect
    }
}
