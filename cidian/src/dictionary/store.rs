//! Primary word store: an ordered multi-valued map from word to tags.

use std::collections::{BTreeMap, BTreeSet};

use smol_str::SmolStr;

/// Ordered mapping from a word to its set of part-of-speech tags.
///
/// A word inserted with no tags is present-but-untagged, represented by an
/// empty tag set; inserting more tags later augments the set and never
/// replaces it. Key enumeration order is lexicographic and deterministic,
/// which the index rebuild and `save` rely on.
#[derive(Clone, Debug, Default)]
pub struct WordStore {
    entries: BTreeMap<SmolStr, BTreeSet<SmolStr>>,
}

impl WordStore {
    /// Creates an empty store.
    pub fn new() -> WordStore {
        WordStore {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts `word` and merges `tags` into its tag set.
    ///
    /// Total over arbitrary strings; duplicate tags are no-ops.
    pub fn insert<I, S>(&mut self, word: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self
            .entries
            .entry(SmolStr::new(word))
            .or_insert_with(BTreeSet::new);
        for tag in tags {
            entry.insert(SmolStr::new(tag.as_ref()));
        }
    }

    /// Whether `word` is present, tagged or not.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The tag set of `word`, or `None` if absent.
    ///
    /// An untagged-but-present word yields `Some` of an empty set; callers
    /// that only care about membership should use [`WordStore::contains`].
    pub fn tags(&self, word: &str) -> Option<&BTreeSet<SmolStr>> {
        self.entries.get(word)
    }

    /// All words, in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &SmolStr> {
        self.entries.keys()
    }

    /// All `(word, tags)` entries, in lexicographic word order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &BTreeSet<SmolStr>)> {
        self.entries.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
