//! Core logic for the Jumble word-scramble game.
//!
//! Two independent in-memory structures do the interesting work: a
//! fixed-capacity chained [`WordSet`] validating guesses against a
//! mini-dictionary, and an AVL-balanced [`Leaderboard`] answering ranked
//! top-K queries over (name, score) entries. The remaining modules are the
//! game caller wired on top of them: word lists, scrambling and round/score
//! bookkeeping.

pub mod dictionary;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod score;
pub mod scramble;
pub mod word_set;

pub use error::JumbleError;
pub use game::{judge, GuessOutcome, Round, Session, Tally, EXACT_POINTS, VALID_POINTS};
pub use leaderboard::Leaderboard;
pub use score::ScoreEntry;
pub use scramble::scramble;
pub use word_set::{WordSet, MIN_BUCKETS};
