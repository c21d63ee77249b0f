//! Word-list loading and normalization for the trie dictionary.

use super::trie::Trie;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Words shorter than this are rejected by validation.
pub const MIN_WORD_LEN: usize = 2;
/// Words longer than this are rejected as likely corruption.
pub const MAX_WORD_LEN: usize = 50;
/// Raw lines longer than this are dropped before normalization.
const MAX_RAW_LEN: usize = 100;
/// More identical characters in a row than this marks a corrupted entry.
const MAX_CHAR_RUN: usize = 3;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// There is nothing useful to check against, so this is the one
    /// hard failure the loader surfaces.
    #[error("no valid words loaded from dictionary {0}")]
    Empty(PathBuf),
}

/// A loaded dictionary plus counts from the load pass.
#[derive(Debug)]
pub struct DictionaryLoad {
    pub trie: Trie,
    pub words_loaded: usize,
    pub lines_skipped: usize,
}

/// Case-fold a raw token and strip everything non-alphabetic.
///
/// Returns `None` when nothing alphabetic remains or the raw input is
/// implausibly long.
pub fn normalize_word(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.chars().count() > MAX_RAW_LEN {
        return None;
    }

    let normalized: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (!normalized.is_empty()).then_some(normalized)
}

/// Validity gate applied after normalization: lowercase alphabetic,
/// length within [MIN_WORD_LEN, MAX_WORD_LEN], and no character repeated
/// more than MAX_CHAR_RUN times in a row (words like "aaaaaaa" are
/// treated as corruption).
pub fn is_valid_word(word: &str) -> bool {
    let len = word.len();
    if len < MIN_WORD_LEN || len > MAX_WORD_LEN {
        return false;
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }

    let mut run = 1;
    let bytes = word.as_bytes();
    for i in 1..bytes.len() {
        if bytes[i] == bytes[i - 1] {
            run += 1;
            if run > MAX_CHAR_RUN {
                return false;
            }
        } else {
            run = 1;
        }
    }

    true
}

/// Load a one-word-per-line dictionary file into a trie.
///
/// Blank lines are ignored; lines that normalize to empty or fail the
/// validity gate are skipped without aborting the load. Loading zero
/// words is a hard error.
pub fn load_dictionary(path: &Path) -> Result<DictionaryLoad, DictionaryError> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let load = load_from_lines(content.lines());

    if load.words_loaded == 0 {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    if load.lines_skipped > 0 {
        eprintln!(
            "Warning: skipped {} invalid lines in dictionary '{}'",
            load.lines_skipped,
            path.display()
        );
    }

    Ok(load)
}

/// Build a trie from an iterator of raw lines, applying the same
/// normalization and validity gate as the file loader.
pub fn load_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> DictionaryLoad {
    let mut trie = Trie::new();
    let mut words_loaded = 0;
    let mut lines_skipped = 0;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match normalize_word(line) {
            Some(word) if is_valid_word(&word) => {
                if trie.insert(&word) {
                    words_loaded += 1;
                } else {
                    lines_skipped += 1;
                }
            }
            _ => lines_skipped += 1,
        }
    }

    DictionaryLoad {
        trie,
        words_loaded,
        lines_skipped,
    }
}
