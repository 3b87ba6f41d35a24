use std::{
    io::{self, BufRead, Stdin, Stdout, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use hangman::{GameState, GuessOutcome, Outcome, Prompt, Render, Status};
use tracing::debug;

const TITLE: &str = r"
  _    _
 | |  | |
 | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
 |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
 | |  | | (_| | | | | (_| | | | | | | (_| | | | |
 |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                      __/ |
                     |___/
";

// One drawing per incorrect guess at the default limit.
const GALLOWS: [&str; 7] = [
    r"
   --------
   |      |
   |
   |
   |
   |
   -
",
    r"
   --------
   |      |
   |      O
   |
   |
   |
   -
",
    r"
   --------
   |      |
   |      O
   |      |
   |      |
   |
   -
",
    r"
   --------
   |      |
   |      O
   |     \|
   |      |
   |
   -
",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |
   -
",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |     /
   -
",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |     / \
   -
",
];

/// Reads player answers from stdin.
pub struct Keyboard {
    stdin: Stdin,
}

impl Keyboard {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the game on stdout.
pub struct Screen {
    stdout: Stdout,
    pause: Duration,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            pause: Duration::from_secs(1),
        }
    }

    fn header(&mut self, max_incorrect: usize) {
        if let Err(error) = execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0)) {
            debug!(%error, "could not clear the screen");
        }

        println!("{TITLE}");
        println!("{}", "=".repeat(50));
        println!("       WELCOME TO HANGMAN");
        println!("{}", "=".repeat(50));
        println!("Guess the word by entering one letter at a time.");
        println!("You can make up to {max_incorrect} incorrect guesses.\n");
    }

    fn gallows(&mut self, game: &GameState) {
        let stage = scaled_stage(game.stage(), game.max_incorrect());
        println!("{}", GALLOWS[stage]);
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one line of raw bytes. Invalid UTF-8 is replaced rather than
/// reported, so it reaches validation like any other bad answer.
fn read_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
    }
}

/// Maps a stage onto the drawings so the last one always means "hanged",
/// whatever the incorrect guess limit is.
fn scaled_stage(stage: usize, max_incorrect: usize) -> usize {
    let last = GALLOWS.len() - 1;
    if max_incorrect == 0 {
        return last;
    }
    (stage * last / max_incorrect).min(last)
}

impl Prompt for Keyboard {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        read_answer(&mut self.stdin.lock())
    }
}

impl Render for Screen {
    fn status(&mut self, game: &GameState) {
        self.header(game.max_incorrect());

        println!("Word to guess: {}", game.masked_word());
        println!(
            "\nIncorrect guesses: {} / {}",
            game.incorrect_count(),
            game.max_incorrect()
        );

        let guessed = game.guessed_letters();
        if !guessed.is_empty() {
            let guessed: Vec<_> = guessed.iter().map(char::to_string).collect();
            println!("Guessed letters: {}", guessed.join(" "));
        }

        self.gallows(game);
    }

    fn feedback(&mut self, guess: &GuessOutcome) {
        match guess.outcome {
            Outcome::Hit => println!("✅ Good guess! '{}' is in the word.", guess.letter),
            Outcome::Miss => println!("❌ Sorry, '{}' is not in the word.", guess.letter),
        }
    }

    fn rejected(&mut self, message: &str) {
        println!("⚠️  {message}");
    }

    fn result(&mut self, game: &GameState) {
        self.header(game.max_incorrect());
        self.gallows(game);

        match game.status() {
            Status::Won => {
                println!("🎉 CONGRATULATIONS! YOU WON! 🎉");
                println!("\nYou guessed the word: {}", game.target_word());
                println!(
                    "You had {} incorrect guesses remaining.\n",
                    game.remaining_guesses()
                );
            }
            Status::Lost => {
                println!("💀 GAME OVER! Better luck next time! 💀");
                println!("\nThe word was: {}\n", game.target_word());
            }
            Status::InProgress => {}
        }
    }

    fn farewell(&mut self) {
        println!("\nThanks for playing Hangman!");
    }

    fn pause(&mut self) {
        thread::sleep(self.pause);
    }
}
