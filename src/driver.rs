//! Pipeline driver
//!
//! Wires the four stages together — preprocess, lex, parse, interpret —
//! and times the whole run. This is the single entry point embedders and
//! the `crun` binary are expected to use.

use std::time::Instant;

use crate::config::RunnerConfig;
use crate::error::CError;
use crate::interpreter;
use crate::lexer;
use crate::parser;
use crate::preprocess;

pub enum RunOutcome {
    /// `duration` is elapsed wall time in seconds — the only field that can
    /// differ between two runs of identical input.
    Success { output: String, warnings: Vec<String>, duration: f64 },
    Failure(CError),
}

/// Run `source` with the default (unbounded) [`RunnerConfig`].
pub fn run(source: &str) -> RunOutcome {
    run_with_config(source, &RunnerConfig::default())
}

/// Run `source` through the full pipeline, applying `config`'s budgets.
pub fn run_with_config(source: &str, config: &RunnerConfig) -> RunOutcome {
    let start = Instant::now();
    match run_pipeline(source, config) {
        Ok((output, warnings)) => {
            let duration = start.elapsed().as_secs_f64();
            log::debug!("run succeeded in {duration}s, {} bytes of output", output.len());
            RunOutcome::Success { output, warnings, duration }
        }
        Err(err) => {
            log::debug!("run failed: {err}");
            RunOutcome::Failure(err)
        }
    }
}

fn run_pipeline(source: &str, config: &RunnerConfig) -> Result<(String, Vec<String>), CError> {
    let normalized = preprocess::preprocess(source);
    log::trace!("preprocessed source is {} bytes", normalized.len());

    let tokens = lexer::tokenize(&normalized)?;
    log::trace!("lexed {} tokens", tokens.len());

    let parsed = parser::parse(&tokens)?;
    log::trace!("parsed {} top-level statements", parsed.body.len());

    let mut warnings = parsed.warnings;
    let exec = interpreter::execute(&parsed.body, config)?;
    warnings.extend(exec.warnings);

    Ok((exec.output, warnings))
}
