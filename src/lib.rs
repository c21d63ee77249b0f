pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod distance;
pub mod oracle;
pub mod parser;

pub use checker::SpellChecker;
pub use config::Config;

use checker::suggestions::Suggestion;
use oracle::OracleStats;
use serde::Serialize;

/// Aggregated outcome of checking one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpellCheckReport {
    pub words_checked: usize,
    pub error_count: usize,
    pub errors: Vec<SpellError>,
    pub oracle_stats: OracleStats,
}

/// One rejected token with its ranked corrections.
#[derive(Debug, Clone, Serialize)]
pub struct SpellError {
    /// Normalized form that failed lookup.
    pub word: String,
    /// Surface text as it appeared in the document.
    pub original: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column offset.
    pub column: usize,
    pub suggestions: Vec<Suggestion>,
}
