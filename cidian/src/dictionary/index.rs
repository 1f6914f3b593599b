//! Derived prefix index mapping a fixed-length key to candidate word
//! lengths, longest first.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use smol_str::SmolStr;

/// Secondary index over the word store for maximal matching.
///
/// Every word at least `key_len` characters long is bucketed under its
/// first `key_len` characters; a bucket holds the distinct lengths of the
/// words sharing that prefix, sorted strictly descending so a
/// maximal-match segmenter can try the longest candidate first and fall
/// back without sorting.
///
/// Words shorter than `key_len` are not indexed at all. They stay
/// reachable through direct store lookups, which is why the dictionary
/// rebuilds with `key_len` equal to its current minimum word length
/// whenever exhaustiveness matters.
///
/// An index is always built whole from a snapshot of the store and swapped
/// in; it is never patched per insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LengthIndex {
    buckets: HashMap<SmolStr, Box<[usize]>>,
    key_len: usize,
}

impl LengthIndex {
    /// Builds the index over `words` with the given prefix key length.
    ///
    /// Deterministic and idempotent: the same words and key length always
    /// produce bucket-for-bucket identical indexes.
    pub fn build<'a, I>(words: I, key_len: usize) -> LengthIndex
    where
        I: IntoIterator<Item = &'a SmolStr>,
    {
        let mut grouped: HashMap<SmolStr, BTreeSet<usize>> = HashMap::new();
        for word in words {
            let len = word.chars().count();
            if len < key_len {
                continue;
            }
            let key: String = word.chars().take(key_len).collect();
            grouped
                .entry(SmolStr::new(key))
                .or_insert_with(BTreeSet::new)
                .insert(len);
        }

        let buckets = grouped
            .into_iter()
            .map(|(key, lens)| {
                let descending: Vec<usize> = lens.into_iter().rev().collect();
                (key, descending.into_boxed_slice())
            })
            .collect();

        LengthIndex { buckets, key_len }
    }

    /// Candidate word lengths for `prefix`, longest first, or `None` if no
    /// indexed word starts with it.
    ///
    /// A prefix whose character count differs from [`LengthIndex::key_len`]
    /// simply misses; that is not an error.
    pub fn lengths(&self, prefix: &str) -> Option<&[usize]> {
        self.buckets.get(prefix).map(|lens| &**lens)
    }

    /// The prefix key length this index was built with.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Number of prefix buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index has no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<SmolStr> {
        list.iter().map(|w| SmolStr::new(*w)).collect()
    }

    #[test]
    fn buckets_by_char_prefix() {
        let words = words(&["保修期", "保修", "保险", "终端"]);
        let index = LengthIndex::build(words.iter(), 2);

        assert_eq!(index.lengths("保修"), Some(&[3, 2][..]));
        assert_eq!(index.lengths("保险"), Some(&[2][..]));
        assert_eq!(index.lengths("终端"), Some(&[2][..]));
        assert_eq!(index.lengths("终"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn lengths_are_strictly_descending_and_distinct() {
        let words = words(&["保修期", "保修", "保修期限", "保修服务点", "保修期"]);
        let index = LengthIndex::build(words.iter(), 2);

        let lens = index.lengths("保修").unwrap();
        assert_eq!(lens, &[5, 4, 3, 2]);
        assert!(lens.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn every_long_enough_word_is_covered() {
        let all = words(&["终端", "终端机", "保修期", "服务", "热线电话"]);
        let index = LengthIndex::build(all.iter(), 2);

        for word in &all {
            let len = word.chars().count();
            let key: String = word.chars().take(2).collect();
            assert!(index.lengths(&key).unwrap().contains(&len), "missing {}", word);
        }
    }

    #[test]
    fn short_words_are_excluded() {
        let words = words(&["终", "终端"]);
        let index = LengthIndex::build(words.iter(), 2);

        assert_eq!(index.lengths("终端"), Some(&[2][..]));
        assert_eq!(index.lengths("终"), None);

        let index = LengthIndex::build(
            [SmolStr::new("终"), SmolStr::new("终端")].iter(),
            1,
        );
        assert_eq!(index.lengths("终"), Some(&[2, 1][..]));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let words = words(&["终端", "终端机", "保修期", "保修"]);
        let first = LengthIndex::build(words.iter(), 2);
        let second = LengthIndex::build(words.iter(), 2);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = LengthIndex::build(std::iter::empty::<&SmolStr>(), 2);
        assert!(index.is_empty());
        assert_eq!(index.key_len(), 2);
        assert_eq!(index.lengths("终端"), None);
    }
}
