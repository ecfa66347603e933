//! Command implementations for the spellmend CLI.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Deserialize;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellmendError};
use crate::spelling::*;

/// One request in a batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub query: String,
    #[serde(default = "default_handler")]
    pub handler: String,
    #[serde(default)]
    pub corrections: Vec<RawCorrection>,
}

fn default_handler() -> String {
    "AllFields".to_string()
}

/// Execute a CLI command.
pub fn execute_command(args: SpellmendArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_query(tokenize_args, &args),
        Command::Suggest(suggest_args) => suggest(suggest_args, &args),
        Command::Batch(batch_args) => run_batch(batch_args, &args),
    }
}

/// Print the tokens of a query.
fn tokenize_query(args: &TokenizeArgs, cli_args: &SpellmendArgs) -> Result<()> {
    let result = TokenizeResult {
        query: args.query.clone(),
        tokens: tokenize(&args.query),
    };
    output_result("Tokens", &result, cli_args)
}

/// Build suggestions for one query.
fn suggest(args: &SuggestArgs, cli_args: &SpellmendArgs) -> Result<()> {
    let config = args.spelling.resolve()?;
    log::info!("using spelling config {config:?}");

    let corrections = load_corrections(&args.corrections)?;
    let processor = SpellingProcessor::with_config(config);
    let suggestions = processor.correct(&corrections, &args.query, &args.handler);

    output_result("Suggestions", &SuggestResult::from(suggestions), cli_args)
}

/// Build suggestions for every request in a JSON Lines file.
fn run_batch(args: &BatchArgs, cli_args: &SpellmendArgs) -> Result<()> {
    let config = args.spelling.resolve()?;
    let requests = load_batch_requests(&args.requests)?;
    log::info!(
        "processing {} requests from {}",
        requests.len(),
        args.requests.display()
    );

    let start_time = Instant::now();
    let results = process_batch(&requests, config);
    let duration = start_time.elapsed();

    log::info!(
        "processed {} requests in {} ms",
        requests.len(),
        duration.as_millis()
    );

    let result = BatchResult {
        requests: requests.len(),
        duration_ms: duration.as_millis() as u64,
        results,
    };
    print!("{}", render_batch(&result, cli_args)?);
    Ok(())
}

/// Process independent requests in parallel, keeping input order.
pub fn process_batch(requests: &[BatchRequest], config: SpellingConfig) -> Vec<SuggestResult> {
    let processor = SpellingProcessor::with_config(config);
    requests
        .par_iter()
        .map(|request| {
            SuggestResult::from(processor.correct(
                &request.corrections,
                &request.query,
                &request.handler,
            ))
        })
        .collect()
}

/// Load backend corrections from a JSON array file.
pub fn load_corrections<P: AsRef<Path>>(path: P) -> Result<Vec<RawCorrection>> {
    let content = fs::read_to_string(path.as_ref())?;
    let corrections: Vec<RawCorrection> = serde_json::from_str(&content)?;
    log::debug!(
        "loaded {} corrections from {}",
        corrections.len(),
        path.as_ref().display()
    );
    Ok(corrections)
}

/// Load batch requests from a JSON Lines file. Blank lines are skipped.
pub fn load_batch_requests<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRequest>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut requests = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = serde_json::from_str(&line).map_err(|e| {
            SpellmendError::invalid_argument(format!("request on line {}: {e}", line_num + 1))
        })?;
        requests.push(request);
    }

    Ok(requests)
}
