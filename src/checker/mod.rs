pub mod suggestions;

use crate::dict::Trie;
use crate::oracle::{Oracle, Validation};
use crate::parser::Token;
use crate::{Config, SpellCheckReport, SpellError};
use regex::Regex;

/// Tunable checking behavior, split out from the wider app config so
/// the orchestrator can be driven directly in tests.
#[derive(Debug, Clone)]
pub struct CheckPolicy {
    pub max_suggestions: usize,
    /// Skip likely proper nouns instead of reporting them. This is a
    /// capitalization heuristic, an exclusion filter only; it never
    /// validates a word.
    pub skip_proper_nouns: bool,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            max_suggestions: suggestions::MAX_SUGGESTIONS,
            skip_proper_nouns: true,
        }
    }
}

/// Scans tokenized documents against a frozen dictionary and assembles
/// a structured report. The dictionary and token stream are never
/// mutated; checking multiple documents against one `SpellChecker` is
/// read-only throughout.
pub struct SpellChecker {
    dictionary: Trie,
    oracle: Option<Box<dyn Oracle>>,
    ignore_patterns: Vec<Regex>,
    policy: CheckPolicy,
}

impl SpellChecker {
    pub fn new(dictionary: Trie, config: &Config) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Self {
            dictionary,
            oracle: None,
            ignore_patterns,
            policy: CheckPolicy {
                max_suggestions: config.max_suggestions,
                skip_proper_nouns: config.skip_proper_nouns,
            },
        }
    }

    /// Attach a fallback oracle consulted for words the local
    /// dictionary rejects.
    pub fn with_oracle(mut self, oracle: Box<dyn Oracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn dictionary(&self) -> &Trie {
        &self.dictionary
    }

    /// Check an ordered token stream and collect every misspelling with
    /// ranked corrections.
    ///
    /// Oracle failures degrade to not-found and the scan continues; no
    /// per-token condition aborts the document.
    pub fn check_document(&self, tokens: &[Token]) -> SpellCheckReport {
        let mut report = SpellCheckReport::default();

        for token in tokens {
            if token.word.is_empty() || self.should_ignore(&token.original) {
                continue;
            }

            report.words_checked += 1;

            if self.dictionary.contains(&token.word) {
                continue;
            }

            if let Some(oracle) = &self.oracle {
                report.oracle_stats.requests += 1;
                match oracle.validate(&token.word) {
                    Ok(Validation::Found { .. }) => {
                        report.oracle_stats.found += 1;
                        continue;
                    }
                    Ok(Validation::NotFound) => report.oracle_stats.not_found += 1,
                    Err(e) => {
                        report.oracle_stats.errors += 1;
                        eprintln!("Warning: oracle lookup failed for '{}': {}", token.word, e);
                    }
                }
            }

            if self.policy.skip_proper_nouns && is_likely_proper_noun(token) {
                continue;
            }

            let suggestions =
                suggestions::rank(&token.word, &self.dictionary, self.policy.max_suggestions);

            report.errors.push(SpellError {
                word: token.word.clone(),
                original: token.original.clone(),
                line: token.line,
                column: token.column,
                suggestions,
            });
        }

        report.error_count = report.errors.len();
        report
    }

    fn should_ignore(&self, original: &str) -> bool {
        self.ignore_patterns.iter().any(|re| re.is_match(original))
    }
}

/// Capitalized and not at the start of a line reads as a proper noun.
/// Column position stands in for sentence-initial detection.
fn is_likely_proper_noun(token: &Token) -> bool {
    let capitalized = token
        .original
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase());

    capitalized && token.column != 0
}
