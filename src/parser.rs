//! Plain-text tokenization into positioned, normalized word tokens.

use crate::dict::loader::{is_valid_word, normalize_word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// One checkable unit of input text.
///
/// `word` is the normalized form (lowercase, alphabetic-only) used for
/// dictionary lookups; `original` is the surface text as it appeared.
/// `line` is 1-based, `column` is the 0-based character offset of the
/// token within its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub original: String,
    pub line: usize,
    pub column: usize,
}

/// Tokenize a document into positioned words.
///
/// Word boundaries follow Unicode segmentation; candidates that contain
/// no alphabetic characters, or whose normalized form fails the
/// dictionary validity gate, are dropped.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        for (offset, piece) in line.split_word_bound_indices() {
            if !piece.chars().any(|c| c.is_alphabetic()) {
                continue;
            }

            let word = match normalize_word(piece) {
                Some(w) if is_valid_word(&w) => w,
                _ => continue,
            };

            tokens.push(Token {
                word,
                original: piece.to_string(),
                line: line_idx + 1,
                column: line[..offset].chars().count(),
            });
        }
    }

    tokens
}

/// Read and tokenize a text file.
pub fn load_document(path: &Path) -> Result<Vec<Token>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(tokenize(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_with_positions() {
        let tokens = tokenize("Hello world");
        assert_eq!(tokens.len(), 2);

        assert_eq!(tokens[0].word, "hello");
        assert_eq!(tokens[0].original, "Hello");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 0);

        assert_eq!(tokens[1].word, "world");
        assert_eq!(tokens[1].column, 6);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let tokens = tokenize("first\nsecond\n\nfourth");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 4);
    }

    #[test]
    fn test_punctuation_and_numbers_skipped() {
        let tokens = tokenize("wait... 123 !? ok");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["wait", "ok"]);
    }

    #[test]
    fn test_contractions_normalize() {
        let tokens = tokenize("don't stop");
        assert_eq!(tokens[0].word, "dont");
        assert_eq!(tokens[0].original, "don't");
    }

    #[test]
    fn test_invalid_words_dropped() {
        // Single letters and over-repeated runs fail the validity gate.
        let tokens = tokenize("a aaaaaa fine");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["fine"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n").is_empty());
    }
}
