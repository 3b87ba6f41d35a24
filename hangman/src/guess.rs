use thiserror::Error;

/// Why a line of player input is not a usable guess. The messages are meant
/// to be shown to the player as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a letter.")]
    Empty,
    #[error("Please enter exactly one letter.")]
    WrongLength(usize),
    #[error("Please enter a letter from A-Z.")]
    NotAlphabetic(String),
    #[error("You already guessed '{0}'. Try a different letter.")]
    AlreadyGuessed(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Please enter 'y' for yes or 'n' for no.")]
pub struct ReplyError(pub String);

/// Turns a raw line into a normalized, not-yet-guessed uppercase letter.
///
/// Surrounding whitespace is ignored. Checks run in order: empty, length,
/// alphabetic (ASCII only), already guessed.
pub fn validate_guess(raw: &str, guessed: &[char]) -> Result<char, GuessError> {
    let input = raw.trim();

    let mut chars = input.chars();
    let letter = match (chars.next(), chars.next()) {
        (None, _) => return Err(GuessError::Empty),
        (Some(c), None) => c,
        (Some(_), Some(_)) => return Err(GuessError::WrongLength(input.chars().count())),
    };

    if !letter.is_ascii_alphabetic() {
        return Err(GuessError::NotAlphabetic(input.to_owned()));
    }

    let letter = letter.to_ascii_uppercase();
    if guessed.contains(&letter) {
        return Err(GuessError::AlreadyGuessed(letter));
    }

    Ok(letter)
}

/// Reads a yes/no answer to "play again?".
pub fn parse_replay(raw: &str) -> Result<bool, ReplyError> {
    let answer = raw.trim();
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ReplyError(answer.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(validate_guess("", &[]), Err(GuessError::Empty));
        assert_eq!(validate_guess("  \n", &[]), Err(GuessError::Empty));
    }

    #[test]
    fn wrong_length() {
        assert_eq!(validate_guess("AB", &[]), Err(GuessError::WrongLength(2)));
        assert_eq!(validate_guess(" abc ", &[]), Err(GuessError::WrongLength(3)));
    }

    #[test]
    fn not_alphabetic() {
        assert_eq!(
            validate_guess("5", &[]),
            Err(GuessError::NotAlphabetic("5".into()))
        );
        assert_eq!(
            validate_guess("?", &[]),
            Err(GuessError::NotAlphabetic("?".into()))
        );
        assert_eq!(
            validate_guess("é", &[]),
            Err(GuessError::NotAlphabetic("é".into()))
        );
    }

    #[test]
    fn already_guessed() {
        assert_eq!(
            validate_guess("a", &['A', 'T']),
            Err(GuessError::AlreadyGuessed('A'))
        );
    }

    #[test]
    fn accepts_and_uppercases() {
        assert_eq!(validate_guess("b", &[]), Ok('B'));
        assert_eq!(validate_guess(" q\n", &['A']), Ok('Q'));
    }

    #[test]
    fn messages_are_player_facing() {
        assert_eq!(
            GuessError::AlreadyGuessed('E').to_string(),
            "You already guessed 'E'. Try a different letter."
        );
        assert_eq!(
            ReplyError("maybe".into()).to_string(),
            "Please enter 'y' for yes or 'n' for no."
        );
    }

    #[test]
    fn replay_answers() {
        for yes in ["y", "Y", "yes", " YES\n", "Yes"] {
            assert_eq!(parse_replay(yes), Ok(true), "{yes:?}");
        }
        for no in ["n", "N", "no", "NO "] {
            assert_eq!(parse_replay(no), Ok(false), "{no:?}");
        }
        for other in ["", "yep", "nope", "1"] {
            assert!(parse_replay(other).is_err(), "{other:?}");
        }
    }
}
