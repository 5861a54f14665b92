use std::collections::HashSet;

use jumble::WordSet;
use quickcheck::quickcheck;

quickcheck! {
    fn behaves_like_a_set(keys: Vec<String>, probes: Vec<String>) -> bool {
        let mut set = WordSet::with_capacity(keys.len());
        let mut model = HashSet::new();
        for key in &keys {
            set.add(key);
            model.insert(key.clone());
        }
        set.len() == model.len()
            && keys.iter().all(|key| set.contains(key))
            && probes.iter().all(|probe| set.contains(probe) == model.contains(probe))
    }
}

quickcheck! {
    fn adding_twice_changes_nothing(keys: Vec<String>) -> bool {
        let mut once = WordSet::with_capacity(keys.len());
        let mut twice = WordSet::with_capacity(keys.len());
        for key in &keys {
            once.add(key);
            twice.add(key);
            twice.add(key);
        }
        once.len() == twice.len() && keys.iter().all(|key| twice.contains(key))
    }
}
