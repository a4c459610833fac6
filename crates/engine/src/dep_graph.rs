//! Dependency graph over cell names.
//!
//! Tracks the relation "t's formula references s" as a set of ordered pairs
//! (s, t), queryable in both directions. s is a *dependee* of t; t is a
//! *dependent* of s.
//!
//! # Edge Direction
//!
//! ```text
//! (A, B)  means  "B's formula reads A"  (A is a dependee of B)
//! ```
//!
//! This makes "what must be recomputed if A changes?" a single map lookup.
//!
//! The graph knows nothing about cells, formulas, or values; it is a pure
//! relation over strings, owned and mutated by the spreadsheet engine.

use rustc_hash::{FxHashMap, FxHashSet};

/// Bidirectional dependency relation over cell names.
///
/// Maintains two adjacency maps that are always exact duals:
/// - `dependents[s]` = the cells whose formulas read s
/// - `dependees[t]` = the cells t's formula reads
///
/// # Invariants
///
/// 1. **Dual consistency:** (s, t) is in `dependents` iff it is in
///    `dependees`. All four mutators touch both maps.
/// 2. **No dangling entries:** a set that becomes empty is removed, so
///    key-existence checks answer "has any" in O(1).
/// 3. **Exact size:** `size` equals the number of distinct ordered pairs.
#[derive(Default, Debug, Clone)]
pub struct DependencyGraph {
    /// s -> {t1, t2, ...}: the cells that depend on s.
    dependents: FxHashMap<String, FxHashSet<String>>,

    /// t -> {s1, s2, ...}: the cells t depends on.
    dependees: FxHashMap<String, FxHashSet<String>>,

    /// Number of distinct (dependee, dependent) pairs.
    size: usize,
}

impl DependencyGraph {
    /// Create an empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct ordered pairs currently present.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if at least one cell depends on `s`.
    pub fn has_dependents(&self, s: &str) -> bool {
        self.dependents.contains_key(s)
    }

    /// Returns true if `t` depends on at least one cell.
    pub fn has_dependees(&self, t: &str) -> bool {
        self.dependees.contains_key(t)
    }

    /// The cells whose formulas read `s`. Empty when there are none.
    pub fn dependents<'a>(&'a self, s: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dependents
            .get(s)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// The cells `t`'s formula reads. Empty when there are none.
    pub fn dependees<'a>(&'a self, t: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dependees
            .get(t)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Insert the pair (s, t). No-op if already present.
    pub fn add_edge(&mut self, s: &str, t: &str) {
        debug_assert!(!s.is_empty() && !t.is_empty(), "empty graph identifier");

        let inserted = self
            .dependents
            .entry(s.to_string())
            .or_default()
            .insert(t.to_string());
        if inserted {
            self.dependees
                .entry(t.to_string())
                .or_default()
                .insert(s.to_string());
            self.size += 1;
        }
    }

    /// Remove the pair (s, t). No-op if absent.
    pub fn remove_edge(&mut self, s: &str, t: &str) {
        let removed = match self.dependents.get_mut(s) {
            Some(set) => {
                let removed = set.remove(t);
                if set.is_empty() {
                    self.dependents.remove(s);
                }
                removed
            }
            None => false,
        };
        if removed {
            if let Some(set) = self.dependees.get_mut(t) {
                set.remove(s);
                if set.is_empty() {
                    self.dependees.remove(t);
                }
            }
            self.size -= 1;
        }
    }

    /// Atomically replace every pair (s, *) with (s, t) for each t in
    /// `new_dependents`. Duplicates collapse to one edge.
    pub fn replace_dependents<I>(&mut self, s: &str, new_dependents: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let old: Vec<String> = self.dependents(s).map(str::to_string).collect();
        for t in old {
            self.remove_edge(s, &t);
        }
        for t in new_dependents {
            self.add_edge(s, t.as_ref());
        }
    }

    /// Atomically replace every pair (*, t) with (s, t) for each s in
    /// `new_dependees`. Duplicates collapse to one edge.
    pub fn replace_dependees<I>(&mut self, t: &str, new_dependees: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let old: Vec<String> = self.dependees(t).map(str::to_string).collect();
        for s in old {
            self.remove_edge(&s, t);
        }
        for s in new_dependees {
            self.add_edge(s.as_ref(), t);
        }
    }

    /// Check all invariants. Panics if any are violated.
    ///
    /// Only available in test builds.
    #[cfg(test)]
    pub fn assert_consistent(&self) {
        let mut pairs = 0;
        for (s, ts) in &self.dependents {
            assert!(!ts.is_empty(), "empty dependents set stored for {s:?}");
            for t in ts {
                pairs += 1;
                assert!(
                    self.dependees.get(t).is_some_and(|set| set.contains(s)),
                    "missing dual: ({s:?}, {t:?}) absent from dependees"
                );
            }
        }
        for (t, ss) in &self.dependees {
            assert!(!ss.is_empty(), "empty dependees set stored for {t:?}");
            for s in ss {
                assert!(
                    self.dependents.get(s).is_some_and(|set| set.contains(t)),
                    "missing dual: ({s:?}, {t:?}) absent from dependents"
                );
            }
        }
        assert_eq!(self.size, pairs, "size does not match pair count");
    }
}
