//! Email address validation.
//!
//! A candidate passes when, after trimming surrounding whitespace, it matches
//! the overall address pattern and both the local part and the domain part
//! pass their structural checks. The overall pattern is deliberately looser
//! than the per-label domain check; both run.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod candidate;
pub mod domain_part;
pub mod local_part;
pub mod rejection;

pub use candidate::Candidate;
pub use domain_part::check_domain_part;
pub use local_part::check_local_part;
pub use rejection::Rejection;

use crate::config::ValidatorConfig;
use crate::email::Email;
use crate::error::{EmailValidatorError, EmailValidatorResult};

/// Whole-address pattern, anchored on both ends
const ADDRESS_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Validator shared by the free functions in this module
static DEFAULT_VALIDATOR: Lazy<EmailValidatorResult<EmailValidator>> =
    Lazy::new(|| EmailValidator::new(&ValidatorConfig::default()));

/// Email address validator holding its compiled patterns
#[derive(Debug, Clone)]
pub struct EmailValidator {
    config: ValidatorConfig,
    address_pattern: Regex,
    label_pattern: Regex,
}

impl EmailValidator {
    /// Create new email validator
    pub fn new(config: &ValidatorConfig) -> EmailValidatorResult<Self> {
        if config.max_input_length == 0 {
            return Err(EmailValidatorError::config("validator max_input_length must be > 0"));
        }

        Ok(Self {
            config: config.clone(),
            address_pattern: Self::compile(ADDRESS_PATTERN)?,
            label_pattern: Self::compile(domain_part::LABEL_PATTERN)?,
        })
    }

    fn compile(pattern: &str) -> EmailValidatorResult<Regex> {
        Regex::new(pattern).map_err(|e| EmailValidatorError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
    }

    /// True if the candidate is a plausible email address
    pub fn validate<C: Candidate + ?Sized>(&self, candidate: &C) -> bool {
        self.check(candidate).is_ok()
    }

    /// Validate and return the trimmed address, or the first failing step
    pub fn check<C: Candidate + ?Sized>(&self, candidate: &C) -> Result<Email, Rejection> {
        let text = candidate.as_text().ok_or(Rejection::NotText)?;
        if text.is_empty() {
            return Err(Rejection::Empty);
        }

        let trimmed = text.trim_matches(is_trimmable);

        let max = self.config.max_input_length;
        if trimmed.len() > max {
            let length = trimmed.chars().count();
            if length > max {
                return Err(Rejection::TooLong { length, max });
            }
        }

        if !self.address_pattern.is_match(trimmed) {
            return Err(Rejection::PatternMismatch);
        }

        // the address pattern admits exactly one "@"
        let (local, domain) = trimmed.split_once('@').ok_or(Rejection::PatternMismatch)?;

        check_local_part(local)?;
        check_domain_part(domain, &self.label_pattern)?;

        Ok(Email::from_validated(trimmed.to_string()))
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// True if the candidate is a plausible email address.
///
/// Total over every [`Candidate`]: non-text values, `None` and empty strings
/// are simply `false`.
pub fn validate_email<C: Candidate + ?Sized>(candidate: &C) -> bool {
    check_email(candidate).is_ok()
}

/// Like [`validate_email`], but reports why a candidate was rejected
pub fn check_email<C: Candidate + ?Sized>(candidate: &C) -> Result<Email, Rejection> {
    match DEFAULT_VALIDATOR.as_ref() {
        Ok(validator) => validator.check(candidate),
        // constant patterns; unreachable in practice, still a rejection
        Err(_) => Err(Rejection::PatternMismatch),
    }
}
