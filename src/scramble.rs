use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `word` into a different order of the same characters.
///
/// Words with fewer than two characters, or whose characters are all equal,
/// have no distinct permutation and come back unchanged; anything else is
/// reshuffled until it differs from the input.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 || chars.iter().all(|&c| c == chars[0]) {
        return word.to_owned();
    }
    loop {
        chars.shuffle(rng);
        let scrambled: String = chars.iter().collect();
        if scrambled != word {
            return scrambled;
        }
    }
}
