//! email-validator - lightweight syntactic email address validation
//!
//! This library provides:
//! - A total `validate_email` check over any value (non-text is simply invalid)
//! - Rejection diagnostics naming the failing step
//! - A validated `Email` newtype
//! - Batch validation with text, JSON and CSV reports

pub mod batch;
pub mod config;
pub mod email;
pub mod error;
pub mod logging;
pub mod report;
pub mod validator;

// Re-export main types for convenience
pub use crate::config::{AppConfig, ValidatorConfig};
pub use crate::email::Email;
pub use crate::error::{EmailValidatorError, EmailValidatorResult};
pub use crate::validator::{check_email, validate_email, Candidate, EmailValidator, Rejection};
