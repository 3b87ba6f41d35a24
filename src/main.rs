use std::{io, process};

use clap::Parser;
use hangman::{Session, WORDS};
use squirrel_rng::SquirrelRng;
use terminal::{Keyboard, Screen};
use tracing_subscriber::EnvFilter;

mod terminal;

/// Guess the hidden word one letter at a time before the gallows are built.
#[derive(Clone, Debug, Parser)]
#[clap(version, about)]
struct Args {}

fn main() {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::debug!(error = ?e, "session aborted");
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut session = Session::new(WORDS, SquirrelRng::new())?;
    session.run(&mut Keyboard::new(), &mut Screen::new())?;
    Ok(())
}
