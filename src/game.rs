//! Round and score bookkeeping for the scramble game.

use rand::Rng;

use crate::scramble::scramble;
use crate::WordSet;

/// Points for guessing the hidden word itself.
pub const EXACT_POINTS: i32 = 10;
/// Points for a dictionary word that is not the hidden one.
pub const VALID_POINTS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The hidden word itself.
    Exact,
    /// A different word the dictionary accepts.
    Valid,
    /// Not in the dictionary.
    Miss,
}

impl GuessOutcome {
    pub fn points(self) -> i32 {
        match self {
            GuessOutcome::Exact => EXACT_POINTS,
            GuessOutcome::Valid => VALID_POINTS,
            GuessOutcome::Miss => 0,
        }
    }
}

/// Judge a trimmed, lowercased guess against the hidden word. An exact hit
/// outranks plain dictionary membership.
pub fn judge(guess: &str, hidden: &str, dict: &WordSet) -> GuessOutcome {
    if guess == hidden {
        GuessOutcome::Exact
    } else if dict.contains(guess) {
        GuessOutcome::Valid
    } else {
        GuessOutcome::Miss
    }
}

/// One dealt round: the hidden word and its scrambled presentation.
#[derive(Debug, Clone)]
pub struct Round {
    pub hidden: String,
    pub scrambled: String,
}

/// Per-outcome counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub exact: usize,
    pub valid: usize,
    pub miss: usize,
}

impl Tally {
    /// Print a one-line outcome summary.
    pub fn report(&self) {
        println!(
            "Rounds: {} exact, {} valid, {} missed",
            self.exact, self.valid, self.miss
        );
    }
}

/// Tracks the word pool, running score and outcome tally of one game.
pub struct Session {
    words: Vec<String>,
    used: Vec<bool>,
    score: i32,
    tally: Tally,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        let used = vec![false; words.len()];
        Session {
            words,
            used,
            score: 0,
            tally: Tally::default(),
        }
    }

    /// Deal a round from a uniformly chosen word that has not been played
    /// yet, or `None` once the pool is exhausted.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Round> {
        let remaining = self.words_remaining();
        if remaining == 0 {
            return None;
        }
        let mut pick = rng.gen_range(0..remaining);
        for i in 0..self.words.len() {
            if self.used[i] {
                continue;
            }
            if pick == 0 {
                self.used[i] = true;
                let hidden = self.words[i].clone();
                let scrambled = scramble(&hidden, rng);
                return Some(Round { hidden, scrambled });
            }
            pick -= 1;
        }
        None
    }

    /// Record a judged guess: add its points and bump the tally.
    pub fn apply(&mut self, outcome: GuessOutcome) {
        self.score += outcome.points();
        match outcome {
            GuessOutcome::Exact => self.tally.exact += 1,
            GuessOutcome::Valid => self.tally.valid += 1,
            GuessOutcome::Miss => self.tally.miss += 1,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn rounds_played(&self) -> usize {
        self.tally.exact + self.tally.valid + self.tally.miss
    }

    pub fn words_remaining(&self) -> usize {
        self.used.iter().filter(|used| !**used).count()
    }
}
