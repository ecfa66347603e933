//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SpellmendArgs};
use crate::error::Result;
use crate::spelling::formatter::DisplaySuggestionSet;

/// Result structure for tokenization.
#[derive(Debug, Serialize)]
pub struct TokenizeResult {
    pub query: String,
    pub tokens: Vec<String>,
}

/// Result structure for a single suggestion request.
#[derive(Debug, Serialize)]
pub struct SuggestResult {
    pub query: String,
    pub handler: String,
    pub suggestions: DisplaySuggestionSet,
}

impl From<DisplaySuggestionSet> for SuggestResult {
    fn from(suggestions: DisplaySuggestionSet) -> Self {
        SuggestResult {
            query: suggestions.query().to_string(),
            handler: suggestions.handler().to_string(),
            suggestions,
        }
    }
}

/// Result structure for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub requests: usize,
    pub duration_ms: u64,
    pub results: Vec<SuggestResult>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    /// Render the result for a terminal.
    fn to_human(&self) -> String;
}

impl HumanOutput for TokenizeResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            let _ = writeln!(out, "{:>3}: {token}", i + 1);
        }
        if self.tokens.is_empty() {
            out.push_str("(no tokens)\n");
        }
        out
    }
}

impl HumanOutput for SuggestResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Query: {} [{}]", self.query, self.handler);

        if self.suggestions.is_empty() {
            out.push_str("No suggestions.\n");
            return out;
        }

        out.push_str("Did you mean?\n");
        out.push_str("═════════════\n");
        for term in &self.suggestions {
            let _ = writeln!(out, "{} ({} matches)", term.term, term.frequency);
            for candidate in &term.suggestions {
                let _ = write!(out, "  {} ({} matches)", candidate.key, candidate.detail.frequency);
                if let Some(expand) = &candidate.detail.expand_term {
                    let _ = write!(out, "  expand: {expand}");
                }
                out.push('\n');
            }
        }
        out
    }
}

impl HumanOutput for BatchResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            out.push_str(&result.to_human());
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "Processed {} requests in {} ms",
            self.requests, self.duration_ms
        );
        out
    }
}

/// Render a result in the requested format.
pub fn render_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellmendArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut out = String::new();
            if args.verbosity() > 1 {
                let _ = writeln!(out, "{message}\n");
            }
            out.push_str(&result.to_human());
            Ok(out)
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json + "\n")
        }
    }
}

/// Render batch results.
///
/// JSON output is JSON Lines: one compact result per request, in input order.
/// Human output lists every result followed by a summary line.
pub fn render_batch(result: &BatchResult, args: &SpellmendArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => render_result("Batch suggestions", result, args),
        OutputFormat::Json => {
            let mut out = String::new();
            for item in &result.results {
                out.push_str(&serde_json::to_string(item)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellmendArgs,
) -> Result<()> {
    print!("{}", render_result(message, result, args)?);
    Ok(())
}
