use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::{Map, Value};

/// Keys drawn by [`Fuzzer::random_json`]. A small alphabet keeps collisions
/// between two generated documents likely, which is what diff tests want.
const KEYS: &[&str] = &["a", "b", "c", "foo", "bar", "a/b", "m~n"];

/// A fuzzer for generating random JSON documents and random edits of them.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use jsondiff_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::from_u64(7);
/// let doc = fuzzer.random_json(3);
/// let edited = fuzzer.mutate(&doc);
///
/// let mut again = Fuzzer::from_u64(7);
/// assert_eq!(again.random_json(3), doc);
/// # let _ = edited;
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a fuzzer from a 64-bit seed, spread over the full seed width.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_mut(8).enumerate() {
            let word = seed.rotate_left(i as u32 * 16) ^ (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Generate a random index in `0..len`. `len` must be non-zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.random_index(elements.len());
        &elements[idx]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Generate a random string of the specified length from the given characters.
    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        (0..len).map(|_| *self.pick(&chars)).collect()
    }

    /// Generate a random scalar from a deliberately narrow value space.
    pub fn random_scalar(&mut self) -> Value {
        match self.random_int(0, 5) {
            0 => Value::Null,
            1 => Value::Bool(self.random_bool(0.5)),
            2 | 3 => Value::from(self.random_int(0, 4)),
            _ => {
                let len = self.random_int(0, 2) as usize;
                Value::String(self.random_string(len, "xyz"))
            }
        }
    }

    /// Generate a random JSON document nested at most `depth` levels deep.
    pub fn random_json(&mut self, depth: usize) -> Value {
        if depth == 0 || self.random_bool(0.35) {
            return self.random_scalar();
        }
        let len = self.random_int(0, 4) as usize;
        if self.random_bool(0.5) {
            Value::Array((0..len).map(|_| self.random_json(depth - 1)).collect())
        } else {
            let mut map = Map::new();
            for _ in 0..len {
                let key = (*self.pick(KEYS)).to_string();
                let val = self.random_json(depth - 1);
                map.insert(key, val);
            }
            Value::Object(map)
        }
    }

    /// Return a randomly edited copy of `doc`.
    ///
    /// Edits are applied throughout the tree: array elements are removed,
    /// inserted, duplicated and reordered; object members are added, dropped
    /// and rewritten; scalars are occasionally swapped for a value of another
    /// kind. The input is not modified.
    pub fn mutate(&mut self, doc: &Value) -> Value {
        match doc {
            Value::Array(items) => {
                let mut items: Vec<Value> = items
                    .iter()
                    .map(|item| {
                        if self.random_bool(0.5) {
                            self.mutate(item)
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                self.edit_array(&mut items);
                Value::Array(items)
            }
            Value::Object(map) => {
                let mut out = Map::new();
                for (key, val) in map {
                    if self.random_bool(0.15) {
                        continue;
                    }
                    let val = if self.random_bool(0.5) {
                        self.mutate(val)
                    } else {
                        val.clone()
                    };
                    out.insert(key.clone(), val);
                }
                if self.random_bool(0.3) {
                    let key = (*self.pick(KEYS)).to_string();
                    let val = self.random_json(2);
                    out.insert(key, val);
                }
                Value::Object(out)
            }
            scalar => {
                if self.random_bool(0.3) {
                    self.random_json(2)
                } else {
                    scalar.clone()
                }
            }
        }
    }

    fn edit_array(&mut self, items: &mut Vec<Value>) {
        let edits = self.random_int(0, 3);
        for _ in 0..edits {
            match self.random_int(0, 4) {
                0 if !items.is_empty() => {
                    let idx = self.random_index(items.len());
                    items.remove(idx);
                }
                1 => {
                    let idx = self.random_index(items.len() + 1);
                    let val = self.random_json(1);
                    items.insert(idx, val);
                }
                2 if items.len() > 1 => {
                    let a = self.random_index(items.len());
                    let b = self.random_index(items.len());
                    items.swap(a, b);
                }
                3 if !items.is_empty() => {
                    let idx = self.random_index(items.len());
                    let dup = items[idx].clone();
                    let at = self.random_index(items.len() + 1);
                    items.insert(at, dup);
                }
                _ if items.len() > 1 => {
                    let by = self.random_index(items.len());
                    items.rotate_left(by);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let mut fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let mut fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];
        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let seed = [1u8; 32];
        let mut fuzzer1 = Fuzzer::new(Some(seed));
        let mut fuzzer2 = Fuzzer::new(Some(seed));
        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
    }

    #[test]
    fn test_fuzzer_random_string() {
        let mut fuzzer = Fuzzer::new(None);
        let s = fuzzer.random_string(10, "abc");
        assert_eq!(s.len(), 10);
        assert!(s.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn test_random_json_respects_depth() {
        fn depth(v: &Value) -> usize {
            match v {
                Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
                Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
                _ => 0,
            }
        }
        let mut fuzzer = Fuzzer::from_u64(42);
        for _ in 0..50 {
            assert!(depth(&fuzzer.random_json(3)) <= 3);
        }
    }

    #[test]
    fn test_mutate_is_seeded() {
        let doc = serde_json::json!({"a": [1, 2, 3, {"b": "x"}], "c": null});
        let mut left = Fuzzer::from_u64(9);
        let mut right = Fuzzer::from_u64(9);
        for _ in 0..20 {
            assert_eq!(left.mutate(&doc), right.mutate(&doc));
        }
    }

    #[test]
    fn test_mutate_eventually_changes_arrays() {
        let doc = serde_json::json!([1, 2, 3, 4, 5]);
        let mut fuzzer = Fuzzer::from_u64(3);
        let changed = (0..50).any(|_| fuzzer.mutate(&doc) != doc);
        assert!(changed);
    }
}
