use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellward::cli::output::{self, OutputFormat};
use spellward::dict;
use spellward::oracle::{DictionaryApiClient, OracleConfig, OracleStats};
use spellward::{parser, Config, SpellChecker};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "spellward")]
#[command(version, about = "A trie-backed spellchecker with edit-distance suggestions", long_about = None)]
struct Cli {
    /// Dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Text files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Maximum number of suggestions per error
    #[arg(short, long)]
    max_suggestions: Option<usize>,

    /// Report misspellings that look like proper nouns too
    #[arg(long)]
    include_proper_nouns: bool,

    /// Pattern to ignore (regex, matched against the original token)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// API key for the external validation oracle
    #[arg(long, env = "SPELLWARD_API_KEY")]
    api_key: Option<String>,

    /// Print oracle statistics after checking
    #[arg(long)]
    stats: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellward", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(
        cli.api_key.clone(),
        cli.max_suggestions,
        cli.ignore_pattern.clone(),
    )?;
    if cli.include_proper_nouns {
        config.skip_proper_nouns = false;
    }

    let dictionary_path = cli
        .dictionary
        .as_ref()
        .context("No dictionary specified. Use --help for usage information.")?;
    if cli.files.is_empty() {
        anyhow::bail!("No input files specified. Use --help for usage information.");
    }

    // A dictionary that loads zero words is a hard failure; there is
    // nothing useful to check against.
    let load = dict::load_dictionary(dictionary_path)?;
    eprintln!(
        "Loaded {} words from '{}'",
        load.words_loaded,
        dictionary_path.display()
    );

    let mut checker = SpellChecker::new(load.trie, &config);

    if let Some(api_key) = &config.api_key {
        let oracle_config = OracleConfig {
            timeout: Duration::from_secs(config.api_timeout_secs),
            ..OracleConfig::new(api_key.clone())
        };
        let oracle = DictionaryApiClient::new(oracle_config)
            .context("Failed to initialize oracle client")?;
        checker = checker.with_oracle(Box::new(oracle));
    }

    let colored = !cli.no_color;
    let mut total_errors = 0;
    let mut total_words = 0;
    let mut oracle_stats = OracleStats::default();

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let tokens = parser::load_document(file_path)?;
        let report = checker.check_document(&tokens);

        output::print_report(file_path, &report, colored, &cli.format);

        total_errors += report.error_count;
        total_words += report.words_checked;
        oracle_stats.requests += report.oracle_stats.requests;
        oracle_stats.found += report.oracle_stats.found;
        oracle_stats.not_found += report.oracle_stats.not_found;
        oracle_stats.errors += report.oracle_stats.errors;
    }

    output::print_check_summary(total_errors, total_words, &cli.files, colored);

    if cli.stats {
        output::print_oracle_stats(&oracle_stats, colored);
    }

    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
