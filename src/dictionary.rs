//! Mini-dictionary word lists and file loading.

use std::fs;
use std::path::Path;

use crate::{JumbleError, WordSet};

/// Words the game ships with.
pub const BUILTIN_WORDS: &[&str] = &[
    "orange", "puzzle", "stream", "planet", "binary", "silent", "listen",
    "triangle", "castle", "python", "java", "random", "bubble", "forest",
    "rocket", "galaxy",
];

/// Build a membership set from `words`, sized at roughly half load factor.
pub fn word_set<S: AsRef<str>>(words: &[S]) -> WordSet {
    let mut set = WordSet::with_capacity(words.len() * 2);
    for word in words {
        set.add(word.as_ref());
    }
    set
}

/// The built-in dictionary as a membership set.
pub fn builtin() -> WordSet {
    word_set(BUILTIN_WORDS)
}

/// Read a word list from a file, one word per line. Lines are trimmed and
/// lowercased; blank lines are skipped. A file with no usable words is
/// rejected rather than producing an unwinnable game.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, JumbleError> {
    let content = fs::read_to_string(path)?;
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        return Err(JumbleError::Dictionary(
            "word list contains no words".into(),
        ));
    }
    Ok(words)
}
