//! Validate many candidates at once and summarise the outcome.

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use crate::validator::EmailValidator;

/// Outcome for one input line
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the source
    pub line: usize,
    pub input: String,
    pub valid: bool,
    /// Rejection code, absent for valid entries
    pub reason: Option<String>,
    /// Human-readable rejection message, absent for valid entries
    pub message: Option<String>,
}

/// Outcome for a whole batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duration_ms: u64,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Copy of the report keeping only rejected entries; totals are kept
    pub fn invalid_only(&self) -> Self {
        Self {
            entries: self.entries.iter().filter(|e| !e.valid).cloned().collect(),
            ..self.clone()
        }
    }
}

/// Runs a validator over a sequence of inputs
pub struct BatchValidator<'a> {
    validator: &'a EmailValidator,
}

impl<'a> BatchValidator<'a> {
    pub fn new(validator: &'a EmailValidator) -> Self {
        Self { validator }
    }

    /// Validate every item; line numbers follow iteration order
    pub fn run<I, S>(&self, inputs: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbered = inputs
            .into_iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s));
        self.run_numbered(numbered)
    }

    /// Validate the non-blank lines of a text, keeping original line numbers
    pub fn run_text(&self, text: &str) -> BatchReport {
        let numbered = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, line));
        self.run_numbered(numbered)
    }

    fn run_numbered<I, S>(&self, inputs: I) -> BatchReport
    where
        I: Iterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let start_time = Instant::now();

        let entries: Vec<BatchEntry> = inputs
            .map(|(line, input)| self.entry(line, input.as_ref()))
            .collect();

        let valid = entries.iter().filter(|e| e.valid).count();
        let total = entries.len();
        let duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            total,
            valid,
            invalid = total - valid,
            duration_ms,
            "Batch validation completed"
        );

        BatchReport {
            total,
            valid,
            invalid: total - valid,
            duration_ms,
            entries,
        }
    }

    fn entry(&self, line: usize, input: &str) -> BatchEntry {
        match self.validator.check(input) {
            Ok(_) => BatchEntry {
                line,
                input: input.to_string(),
                valid: true,
                reason: None,
                message: None,
            },
            Err(rejection) => {
                debug!(line, reason = rejection.code(), "Rejected input");
                BatchEntry {
                    line,
                    input: input.to_string(),
                    valid: false,
                    reason: Some(rejection.code().to_string()),
                    message: Some(rejection.to_string()),
                }
            }
        }
    }
}
