/*! Mutable lexical dictionary for Chinese word segmentation and
part-of-speech lookup.

The dictionary keeps a set of known words, each with zero or more
part-of-speech tags, and maintains a derived prefix index that maps the
first few characters of a word to every word length known to start with
them, longest first. A forward maximal-matching segmenter asks, at a text
position, "which word lengths could begin here?" and tries the answers in
the order given, so it can commit to the longest acceptable candidate
without sorting anything itself.

# Usage example

```
use cidian::{Dictionary, DictionaryConfig, MemoryWordSource};

let source = MemoryWordSource::new("终端\tn\n保修期\tn\n");
let dict = Dictionary::from_sources(&[&source], DictionaryConfig::default());

assert!(dict.contains("保修期"));
assert_eq!(dict.candidate_lengths("保修"), vec![3]);
```

Words added after construction are visible to [`Dictionary::contains`]
immediately but only reach the prefix index on the next
[`Dictionary::rebuild_index`]; see [`Dictionary::is_stale`].
*/

#![warn(missing_docs)]

pub mod dictionary;
pub mod source;

pub use crate::dictionary::index::LengthIndex;
pub use crate::dictionary::store::WordStore;
pub use crate::dictionary::{Dictionary, DictionaryConfig};
pub use crate::source::{
    FileWordSource, MemoryWordSource, RawRecord, SourceError, WordSource,
};
