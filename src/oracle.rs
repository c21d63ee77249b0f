//! External word-validation oracle over the Merriam-Webster dictionary API.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str =
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("spellward/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed")]
    Http(#[from] reqwest::Error),

    #[error("oracle returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse oracle response")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of a successful oracle round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Found { definition: Option<String> },
    NotFound,
}

/// Fallback validator consulted for words absent from the local
/// dictionary. Errors are the caller's to degrade; the orchestrator
/// treats them as not-found and proceeds.
pub trait Oracle {
    fn validate(&self, word: &str) -> Result<Validation, OracleError>;
}

/// Per-batch oracle counters, carried in the check report rather than
/// any process-global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OracleStats {
    pub requests: usize,
    pub found: usize,
    pub not_found: usize,
    pub errors: usize,
}

/// Explicit client configuration; there is no shared global key.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OracleConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Blocking HTTP client for the dictionary API.
pub struct DictionaryApiClient {
    client: reqwest::blocking::Client,
    config: OracleConfig,
}

impl DictionaryApiClient {
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }
}

impl Oracle for DictionaryApiClient {
    fn validate(&self, word: &str) -> Result<Validation, OracleError> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url, word, self.config.api_key
        );

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let json: serde_json::Value = serde_json::from_str(&body)?;

        Ok(interpret_response(word, &json))
    }
}

/// Interpret an API response array for an exact-match lookup.
///
/// A leading object is a dictionary entry; a leading string means the
/// API only has spelling suggestions, i.e. the word is unknown. An
/// entry whose headword base differs from the searched word is a
/// related form, not a validation of the word itself.
fn interpret_response(word: &str, json: &serde_json::Value) -> Validation {
    let entries = match json.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Validation::NotFound,
    };

    let first = &entries[0];
    if !first.is_object() {
        return Validation::NotFound;
    }

    // meta.id is "word" or "word:n" for homographs.
    let base = first
        .pointer("/meta/id")
        .and_then(|id| id.as_str())
        .map(|id| id.split(':').next().unwrap_or(id));

    match base {
        Some(base) if base.eq_ignore_ascii_case(word) => {
            let definition = first
                .pointer("/shortdef/0")
                .and_then(|d| d.as_str())
                .map(|d| d.to_string());
            Validation::Found { definition }
        }
        _ => Validation::NotFound,
    }
}
