use crate::oracle::OracleStats;
use crate::SpellCheckReport;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a SpellCheckReport,
}

pub fn print_report(
    file_path: &Path,
    report: &SpellCheckReport,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(file_path, report, colored_output),
        OutputFormat::Json => print_json_report(file_path, report),
    }
}

fn print_text_report(file_path: &Path, report: &SpellCheckReport, colored_output: bool) {
    if report.errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in &report.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} (original: {})",
                line_info.blue().bold(),
                error.word.red().bold(),
                error.original
            );
        } else {
            println!("  {} {} (original: {})", line_info, error.word, error.original);
        }

        if error.suggestions.is_empty() {
            if colored_output {
                println!("    {} {}", "→".dimmed(), "no suggestions available".dimmed());
            } else {
                println!("    → no suggestions available");
            }
        } else {
            let suggestions = error
                .suggestions
                .iter()
                .map(|s| {
                    if colored_output {
                        format!("{} ({})", s.word.green(), s.distance)
                    } else {
                        format!("{} ({})", s.word, s.distance)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            if colored_output {
                println!("    {} {}", "→".dimmed(), suggestions);
            } else {
                println!("    → {}", suggestions);
            }
        }
    }
}

fn print_json_report(file_path: &Path, report: &SpellCheckReport) {
    let output = JsonOutput {
        file: file_path.display().to_string(),
        report,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize report: {}", e),
    }
}

pub fn print_check_summary(
    total_errors: usize,
    total_words: usize,
    files: &[impl AsRef<Path>],
    colored: bool,
) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let file_word = if files.len() == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} found in {} {} ({} words checked)",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                file_word,
                total_words
            );
        } else {
            println!(
                "✗ {} {} found in {} {} ({} words checked)",
                total_errors,
                error_word,
                files.len(),
                file_word,
                total_words
            );
        }
    }
}

pub fn print_oracle_stats(stats: &OracleStats, colored: bool) {
    if stats.requests == 0 {
        return;
    }

    let header = "Oracle statistics:";
    if colored {
        println!("\n{}", header.bold());
    } else {
        println!("\n{}", header);
    }

    println!("  Requests:        {}", stats.requests);
    println!("  Words found:     {}", stats.found);
    println!("  Words not found: {}", stats.not_found);
    println!("  Failures:        {}", stats.errors);
}
