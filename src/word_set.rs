//! Fixed-capacity chained hash set used for dictionary membership.
//!
//! The bucket array is sized once at construction and never rebuilt; all
//! collisions are resolved by prepending to the bucket's chain. Callers pick
//! a capacity suited to the expected word count.

/// Smallest bucket array the set will allocate, regardless of the hint.
pub const MIN_BUCKETS: usize = 17;

struct ChainNode {
    key: String,
    next: Option<Box<ChainNode>>,
}

pub struct WordSet {
    buckets: Vec<Option<Box<ChainNode>>>,
    len: usize,
}

impl WordSet {
    /// Create a set with `max(17, capacity_hint)` buckets.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        let capacity = capacity_hint.max(MIN_BUCKETS);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        WordSet { buckets, len: 0 }
    }

    /// Number of buckets. Fixed for the lifetime of the set.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys added so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// djb2 over the key's code points. The accumulator wraps instead of
    /// trapping and the sign is normalized before the modulus, never after.
    fn bucket_index(&self, key: &str) -> usize {
        let mut h: i64 = 5381;
        for c in key.chars() {
            h = h.wrapping_mul(33).wrapping_add(c as i64);
        }
        (h.unsigned_abs() % self.buckets.len() as u64) as usize
    }

    pub fn contains(&self, key: &str) -> bool {
        let mut cur = &self.buckets[self.bucket_index(key)];
        while let Some(node) = cur {
            if node.key == key {
                return true;
            }
            cur = &node.next;
        }
        false
    }

    /// Add `key` to the set. Adding a key that is already present is a
    /// silent no-op; the chain is scanned in full before anything is linked.
    pub fn add(&mut self, key: &str) {
        let idx = self.bucket_index(key);
        let mut cur = &self.buckets[idx];
        while let Some(node) = cur {
            if node.key == key {
                return;
            }
            cur = &node.next;
        }
        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(ChainNode {
            key: key.to_owned(),
            next,
        }));
        self.len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_len(set: &WordSet, idx: usize) -> usize {
        let mut n = 0;
        let mut cur = &set.buckets[idx];
        while let Some(node) = cur {
            n += 1;
            cur = &node.next;
        }
        n
    }

    #[test]
    fn capacity_floor() {
        assert_eq!(WordSet::with_capacity(0).capacity(), MIN_BUCKETS);
        assert_eq!(WordSet::with_capacity(5).capacity(), MIN_BUCKETS);
        assert_eq!(WordSet::with_capacity(53).capacity(), 53);
    }

    #[test]
    fn add_and_contains() {
        let mut set = WordSet::with_capacity(17);
        assert!(!set.contains("orange"));
        set.add("orange");
        assert!(set.contains("orange"));
        assert!(!set.contains("orang"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_add_is_noop() {
        let mut set = WordSet::with_capacity(17);
        for _ in 0..10 {
            set.add("puzzle");
        }
        assert_eq!(set.len(), 1);
        assert!(set.contains("puzzle"));
    }

    #[test]
    fn newest_first_chain_order() {
        let mut set = WordSet::with_capacity(MIN_BUCKETS);
        // Force a collision by reserving a single bucket worth of keys.
        let a = "a";
        let idx = set.bucket_index(a);
        set.add(a);
        let mut colliding = None;
        for c in b'b'..=b'z' {
            let key = (c as char).to_string();
            if set.bucket_index(&key) == idx {
                set.add(&key);
                colliding = Some(key);
                break;
            }
        }
        if let Some(key) = colliding {
            let head = set.buckets[idx].as_ref().unwrap();
            assert_eq!(head.key, key, "latest insertion should head the chain");
        }
    }

    #[test]
    fn distribution_smoke() {
        // Sanity, not a strict bound: single letters should spread out.
        let mut set = WordSet::with_capacity(17);
        for c in b'a'..=b'z' {
            set.add(&(c as char).to_string());
        }
        assert_eq!(set.len(), 26);
        let longest = (0..set.capacity()).map(|i| chain_len(&set, i)).max().unwrap();
        assert!(longest <= 3, "bucket chain of length {longest} for 26 keys");
    }

    #[test]
    fn wraparound_keys_land_in_range() {
        // Long keys drive the accumulator through sign wraparound.
        let mut set = WordSet::with_capacity(17);
        let key = "\u{10FFFF}".repeat(64);
        set.add(&key);
        assert!(set.contains(&key));
    }
}
