use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single leaderboard record.
///
/// The stored casing of `name` is what gets displayed; ranking folds case on
/// the fly and never mutates the string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        ScoreEntry {
            name: name.into(),
            score,
        }
    }

    /// Ranking order: score first, ties broken by case-insensitive name.
    pub fn rank_cmp(&self, other: &ScoreEntry) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}

/// Case-insensitive lexicographic comparison over folded code points.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
