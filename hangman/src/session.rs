use std::io;

use rand::Rng;
use tracing::info;

use crate::{
    normalize_words, parse_replay, validate_guess, ConfigError, GameState, GuessOutcome, Result,
    Rules,
};

/// Line-based input from the player.
pub trait Prompt {
    /// Shows `prompt` and reads one line. `None` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Everything the session shows to the player.
pub trait Render {
    fn status(&mut self, game: &GameState);
    fn feedback(&mut self, guess: &GuessOutcome);
    /// Corrective message for input that was not accepted.
    fn rejected(&mut self, message: &str);
    fn result(&mut self, game: &GameState);
    fn farewell(&mut self);

    /// Called between turns.
    fn pause(&mut self) {}
}

pub struct Session<R> {
    words: Vec<String>,
    rules: Rules,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new<S: AsRef<str>>(words: &[S], rng: R) -> Result<Self, ConfigError> {
        Self::with_rules(words, Rules::default(), rng)
    }

    pub fn with_rules<S: AsRef<str>>(
        words: &[S],
        rules: Rules,
        rng: R,
    ) -> Result<Self, ConfigError> {
        if rules.max_incorrect == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(Self {
            words: normalize_words(words)?,
            rules,
            rng,
        })
    }

    /// Plays rounds until the player declines a replay or input runs out,
    /// then says goodbye. Returns the number of rounds finished.
    pub fn run(&mut self, prompt: &mut impl Prompt, render: &mut impl Render) -> Result<usize> {
        let mut rounds = 0;

        while self.play_round(prompt, render)?.is_some() {
            rounds += 1;
            if ask_replay(prompt, render)? != Some(true) {
                break;
            }
        }

        info!(rounds, "session over");
        render.farewell();
        Ok(rounds)
    }

    /// Plays one round to completion. Returns `None` if input ran out first.
    pub fn play_round(
        &mut self,
        prompt: &mut impl Prompt,
        render: &mut impl Render,
    ) -> Result<Option<GameState>> {
        let mut game = GameState::with_rules(self.words.as_slice(), self.rules, &mut self.rng)?;

        while !game.status().is_over() {
            render.status(&game);

            let letter = match read_guess(prompt, render, &game.guessed_letters())? {
                Some(letter) => letter,
                None => return Ok(None),
            };

            let outcome = game.apply_guess(letter)?;
            render.feedback(&outcome);
            render.pause();
        }

        info!(
            status = ?game.status(),
            incorrect = game.incorrect_count(),
            "round over"
        );
        render.result(&game);
        Ok(Some(game))
    }
}

/// Prompts until the player enters a valid letter that has not been guessed.
pub fn read_guess(
    prompt: &mut impl Prompt,
    render: &mut impl Render,
    guessed: &[char],
) -> io::Result<Option<char>> {
    loop {
        let line = match prompt.read_line("Enter a letter: ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        match validate_guess(&line, guessed) {
            Ok(letter) => return Ok(Some(letter)),
            Err(e) => render.rejected(&e.to_string()),
        }
    }
}

/// Prompts until the player answers yes or no.
pub fn ask_replay(prompt: &mut impl Prompt, render: &mut impl Render) -> io::Result<Option<bool>> {
    loop {
        let line = match prompt.read_line("Would you like to play again? (y/n): ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        match parse_replay(&line) {
            Ok(answer) => return Ok(Some(answer)),
            Err(e) => render.rejected(&e.to_string()),
        }
    }
}
