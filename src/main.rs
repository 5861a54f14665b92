use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jumble::{
    dictionary, judge, GuessOutcome, JumbleError, Leaderboard, ScoreEntry, Session,
    EXACT_POINTS, VALID_POINTS,
};

/// Play scrambled-word rounds against the mini-dictionary and rank the
/// result on an AVL leaderboard.
#[derive(Parser)]
struct Args {
    /// Player name; prompts when omitted
    #[arg(long)]
    name: Option<String>,
    /// Number of scrambled-word rounds
    #[arg(long, default_value_t = 5)]
    rounds: usize,
    /// Leaderboard places to display
    #[arg(long, default_value_t = 5)]
    top: usize,
    /// Word list file, one word per line; defaults to the built-in list
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Seed for deterministic dealing and scrambling
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON result summary after the game
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.rounds == 0 {
        return Err(JumbleError::InvalidArgument("rounds must be at least 1".into()).into());
    }
    if args.top == 0 {
        return Err(JumbleError::InvalidArgument("top must be at least 1".into()).into());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let words: Vec<String> = match &args.dictionary {
        Some(path) => dictionary::read_words(path)?,
        None => dictionary::BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
    };
    let dict = dictionary::word_set(&words);

    let rounds = args.rounds.min(words.len());
    if rounds < args.rounds {
        eprintln!("Only {} words available; playing {rounds} rounds", words.len());
    }

    println!("==== Welcome to Jumble ====\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = match args.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => n.to_owned(),
        None => prompt_name(&mut input, &mut rng)?,
    };

    println!("\nYou will get {rounds} scrambled words. Type your guess and press Enter.");
    println!("Exact match: +{EXACT_POINTS}, valid different word: +{VALID_POINTS}\n");

    let mut session = Session::new(words);
    for round_no in 1..=rounds {
        let round = match session.deal(&mut rng) {
            Some(round) => round,
            None => break,
        };
        println!("Round {round_no}: {}", round.scrambled);
        print!("Your guess: ");
        io::stdout().flush()?;
        let guess = read_line(&mut input)?.to_lowercase();

        let outcome = judge(&guess, &round.hidden, &dict);
        session.apply(outcome);
        match outcome {
            GuessOutcome::Exact => println!("Correct! +{EXACT_POINTS} points\n"),
            GuessOutcome::Valid => {
                println!("A valid word, but not the hidden one. +{VALID_POINTS} points\n")
            }
            GuessOutcome::Miss => {
                println!("Not in the mini-dictionary. 0 points. The word was: {}\n", round.hidden)
            }
        }
    }

    println!("Game over, {name}! Your score: {}", session.score());
    session.tally().report();

    let mut leaderboard = Leaderboard::new();
    leaderboard.insert(ScoreEntry::new(name.clone(), session.score()));

    let top = leaderboard.top_k(args.top);
    println!("\n===== Leaderboard (Top {}) =====", args.top);
    for (rank, entry) in top.iter().enumerate() {
        println!("{}. {entry}", rank + 1);
    }
    println!("\n(dictionary size: {})", dict.len());

    if args.json {
        let tally = session.tally();
        let summary = serde_json::json!({
            "player": name,
            "score": session.score(),
            "rounds": session.rounds_played(),
            "exact": tally.exact,
            "valid": tally.valid,
            "miss": tally.miss,
            "leaderboard": top,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn prompt_name<R: Rng>(input: &mut impl BufRead, rng: &mut R) -> io::Result<String> {
    print!("Your name: ");
    io::stdout().flush()?;
    let typed = read_line(input)?;
    if typed.is_empty() {
        Ok(format!("Player{}", rng.gen_range(1..=999)))
    } else {
        Ok(typed)
    }
}
