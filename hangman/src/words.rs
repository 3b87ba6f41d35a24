use crate::ConfigError;

/// The built-in word list.
pub const WORDS: &[&str] = &["PYTHON", "CODING", "ALGORITHM", "DEVELOPER", "COMPUTER"];

/// Uppercases every word in the list, rejecting an empty list or any word
/// containing something other than ASCII letters.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, ConfigError> {
    if words.is_empty() {
        return Err(ConfigError::EmptyWordList);
    }

    words.iter().map(|word| normalize_word(word.as_ref())).collect()
}

fn normalize_word(word: &str) -> Result<String, ConfigError> {
    let word = word.trim();
    if word.is_empty() || !word.bytes().all(|u| u.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidWord(word.to_owned()));
    }
    Ok(word.to_ascii_uppercase())
}
