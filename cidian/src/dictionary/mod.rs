//! The dictionary aggregate: word store, prefix index, bounds and
//! staleness tracking.

use std::collections::BTreeSet;
use std::io::{self, Write};

use itertools::Itertools;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::source::{RawRecord, SourceError, WordSource};

use self::index::LengthIndex;
use self::store::WordStore;

pub mod index;
pub mod store;

/// Default upper bound on word length, in characters.
const MAX_WORD_LEN: usize = 10;
/// Default lower bound on word length, in characters.
const MIN_WORD_LEN: usize = 2;

/// Construction-time settings for a [`Dictionary`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Opaque policy bit consumed by tagger collaborators; controls fuzzy
    /// handling of user-added words, never interpreted here.
    pub ambiguity: bool,
    /// Initial maximum word length; grows when longer words are added.
    pub max_word_len: usize,
    /// Initial minimum word length; shrinks when shorter words are added.
    pub min_word_len: usize,
}

impl DictionaryConfig {
    /// The default configuration: no ambiguity handling, word lengths
    /// bounded to 2..=10 characters.
    pub const fn default() -> DictionaryConfig {
        DictionaryConfig {
            ambiguity: false,
            max_word_len: MAX_WORD_LEN,
            min_word_len: MIN_WORD_LEN,
        }
    }
}

/// A mutable lexical dictionary with a maximal-match prefix index.
///
/// One writer path (construction, [`Dictionary::add_word`],
/// [`Dictionary::load_more`], [`Dictionary::rebuild_index`]) mutates the
/// dictionary while any number of tagger threads read it concurrently;
/// every method takes `&self`, so a shared `Arc<Dictionary>` is all a host
/// needs. Readers never observe a partially rebuilt index: a rebuild
/// replaces the whole index snapshot under the write lock or leaves the
/// previous one intact.
///
/// Ad-hoc adds deliberately do not rebuild the index; they flip the
/// dictionary into a stale state observable through
/// [`Dictionary::is_stale`], and the caller chooses when to pay the
/// rebuild cost. Bulk loading through [`Dictionary::load_more`] rebuilds
/// on its own.
#[derive(Debug)]
pub struct Dictionary {
    inner: RwLock<Inner>,
    ambiguity: bool,
}

#[derive(Debug)]
struct Inner {
    store: WordStore,
    index: LengthIndex,
    max_word_len: usize,
    min_word_len: usize,
    stale: bool,
}

impl Inner {
    /// Inserts one word, widening the length bounds when it falls outside
    /// them. Empty words are malformed input and dropped.
    fn insert<I, S>(&mut self, word: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let len = word.chars().count();
        if len == 0 {
            log::debug!("dropping empty word");
            return;
        }
        if len > self.max_word_len {
            self.max_word_len = len;
        } else if len < self.min_word_len {
            self.min_word_len = len;
        }
        self.store.insert(word, tags);
        self.stale = true;
    }

    fn insert_record(&mut self, record: &RawRecord) {
        self.insert(&record.word, record.tags.iter());
    }

    /// Rebuilds the index from the current store, keyed on the current
    /// minimum word length, and clears staleness.
    fn rebuild(&mut self) {
        let index = LengthIndex::build(self.store.words(), self.min_word_len);
        log::debug!(
            "rebuilt length index: {} buckets, key length {}",
            index.len(),
            index.key_len()
        );
        self.index = index;
        self.stale = false;
    }
}

impl Dictionary {
    /// Creates an empty dictionary with a fresh (empty) index.
    pub fn new(config: DictionaryConfig) -> Dictionary {
        let inner = Inner {
            store: WordStore::new(),
            index: LengthIndex::build(std::iter::empty::<&SmolStr>(), config.min_word_len),
            max_word_len: config.max_word_len,
            min_word_len: config.min_word_len,
            stale: false,
        };
        Dictionary {
            inner: RwLock::new(inner),
            ambiguity: config.ambiguity,
        }
    }

    /// Bulk-loads every source, then builds the index once.
    ///
    /// A source that cannot be opened or read is skipped whole — no partial
    /// records from it are kept — and loading continues with the rest.
    pub fn from_sources(sources: &[&dyn WordSource], config: DictionaryConfig) -> Dictionary {
        let dict = Dictionary::new(config);
        {
            let mut inner = dict.inner.write();
            for source in sources {
                match source.records() {
                    Ok(records) => {
                        for record in &records {
                            inner.insert_record(record);
                        }
                    }
                    Err(err) => log::warn!("skipping word source: {}", err),
                }
            }
            inner.rebuild();
        }
        dict
    }

    /// Adds one word with the given tags.
    ///
    /// The word is visible to [`Dictionary::contains`] and
    /// [`Dictionary::tags_of`] immediately, but the prefix index is not
    /// rebuilt: the dictionary goes stale until [`Dictionary::rebuild_index`]
    /// or [`Dictionary::load_more`] runs.
    pub fn add_word(&self, word: &str, tags: &[&str]) {
        self.inner.write().insert(word, tags.iter().copied());
    }

    /// Adds a batch of words, all sharing one optional tag. Same
    /// non-rebuilding behavior as [`Dictionary::add_word`].
    pub fn add_words<I, S>(&self, words: I, tag: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.write();
        for word in words {
            inner.insert(word.as_ref(), tag);
        }
    }

    /// Loads every record from one more source, then rebuilds the index.
    ///
    /// Returns the number of records read. Unlike construction, a source
    /// failure here surfaces to the caller; the dictionary is left
    /// untouched in that case.
    pub fn load_more(&self, source: &dyn WordSource) -> Result<usize, SourceError> {
        let records = source.records()?;
        let mut inner = self.inner.write();
        for record in &records {
            inner.insert_record(record);
        }
        inner.rebuild();
        Ok(records.len())
    }

    /// Rebuilds the prefix index from the current words, keyed on the
    /// current minimum word length, and clears staleness.
    ///
    /// The new index is swapped in atomically; concurrent readers see the
    /// old snapshot or the new one, never a half-populated map.
    pub fn rebuild_index(&self) {
        self.inner.write().rebuild();
    }

    /// Whether `word` is a known word, tagged or not.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().store.contains(word)
    }

    /// The part-of-speech tags of `word`.
    ///
    /// Empty both for an untagged-but-present word and for an absent one;
    /// use [`Dictionary::contains`] to tell them apart.
    pub fn tags_of(&self, word: &str) -> BTreeSet<SmolStr> {
        self.inner
            .read()
            .store
            .tags(word)
            .cloned()
            .unwrap_or_default()
    }

    /// Candidate word lengths starting with `prefix`, longest first.
    ///
    /// Empty when no indexed word starts with `prefix`, including when the
    /// prefix is not exactly [`Dictionary::index_key_len`] characters long.
    /// Words added since the last rebuild are not reflected here until
    /// [`Dictionary::rebuild_index`] runs.
    pub fn candidate_lengths(&self, prefix: &str) -> Vec<usize> {
        self.inner
            .read()
            .index
            .lengths(prefix)
            .map(|lens| lens.to_vec())
            .unwrap_or_default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.read().store.is_empty()
    }

    /// Current `(min, max)` word-length bounds, in characters.
    ///
    /// Bounds only ever widen: the minimum shrinks and the maximum grows as
    /// out-of-range words are added, and neither moves back.
    pub fn bounds(&self) -> (usize, usize) {
        let inner = self.inner.read();
        (inner.min_word_len, inner.max_word_len)
    }

    /// The prefix key length of the live index snapshot.
    pub fn index_key_len(&self) -> usize {
        self.inner.read().index.key_len()
    }

    /// Whether words were added since the last index rebuild.
    ///
    /// While stale, [`Dictionary::candidate_lengths`] may miss recently
    /// added words even though [`Dictionary::contains`] already sees them.
    pub fn is_stale(&self) -> bool {
        self.inner.read().stale
    }

    /// The opaque ambiguity policy bit this dictionary was built with.
    pub fn ambiguity(&self) -> bool {
        self.ambiguity
    }

    /// All known words, sorted.
    pub fn words(&self) -> Vec<SmolStr> {
        self.inner.read().store.words().cloned().collect()
    }

    /// Writes every word and its tag list to `sink`, one word per line:
    /// the word, a tab, then its tags space-separated; the word alone when
    /// untagged. Output order is the sorted word order, so a save is
    /// deterministic for a given word set.
    pub fn save<W: Write>(&self, mut sink: W) -> io::Result<()> {
        let inner = self.inner.read();
        for (word, tags) in inner.store.iter() {
            if tags.is_empty() {
                writeln!(sink, "{}", word)?;
            } else {
                writeln!(sink, "{}\t{}", word, tags.iter().join(" "))?;
            }
        }
        Ok(())
    }
}
