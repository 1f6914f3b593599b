//! Word-list sources: where dictionary records come from.
//!
//! The dictionary itself never touches the filesystem; it pulls
//! [`RawRecord`]s out of anything implementing [`WordSource`]. The record
//! syntax is one word per line, followed by whitespace-separated
//! part-of-speech tags. Blank lines are skipped, as are comment lines
//! starting with `#` (a lone `#` is a word, not a comment).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

/// One logical word pulled from a source: the word plus its tags.
///
/// An empty tag list marks the word present-but-untagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    /// The word itself.
    pub word: SmolStr,
    /// Part-of-speech tags, possibly empty.
    pub tags: Vec<SmolStr>,
}

/// Failure to pull records out of a source.
///
/// This is the only error the dictionary ever surfaces to a caller;
/// malformed records inside a readable source are skipped, not reported.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The source could not be opened at all.
    #[error("cannot open word source `{}`", .path.display())]
    Open {
        /// Path of the source that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source opened but reading from it failed partway.
    #[error("cannot read word source `{}`", .path.display())]
    Read {
        /// Path of the source that failed mid-read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Something the dictionary can load words from.
pub trait WordSource {
    /// Returns every well-formed record in the source.
    fn records(&self) -> Result<Vec<RawRecord>, SourceError>;
}

/// Parses one line of a word list into a record.
///
/// Returns `None` for blank lines, comment lines (`#` followed by anything)
/// and lines with no fields after trimming.
pub fn parse_record(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    // A lone "#" is a word; "#..." is a comment.
    if line.starts_with('#') && line.len() > 1 {
        return None;
    }
    let mut fields = line.split_whitespace();
    let word = SmolStr::new(fields.next()?);
    let tags = fields.map(SmolStr::new).collect();
    Some(RawRecord { word, tags })
}

/// A word list in a single UTF-8 text file.
#[derive(Clone, Debug)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Creates a source over the file at `path`. Nothing is opened until
    /// [`WordSource::records`] is called.
    pub fn new<P: Into<PathBuf>>(path: P) -> FileWordSource {
        FileWordSource { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn records(&self) -> Result<Vec<RawRecord>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
            if let Some(record) = parse_record(&line) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

/// A word list held in memory, mainly for tests and round-trip checks.
#[derive(Clone, Debug, Default)]
pub struct MemoryWordSource {
    text: String,
}

impl MemoryWordSource {
    /// Creates a source over word-list text in the same line syntax a
    /// [`FileWordSource`] reads.
    pub fn new<S: Into<String>>(text: S) -> MemoryWordSource {
        MemoryWordSource { text: text.into() }
    }
}

impl WordSource for MemoryWordSource {
    fn records(&self) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.text.lines().filter_map(parse_record).collect())
    }
}
