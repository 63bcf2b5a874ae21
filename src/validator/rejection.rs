use serde::Serialize;
use thiserror::Error;

/// Reason an input was not accepted as an email address.
///
/// The public verdict collapses all of these into `false`; the variants exist
/// so callers and reports can say which step failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Rejection {
    #[error("input is not text")]
    NotText,

    #[error("input is empty")]
    Empty,

    #[error("input is {length} characters, max allowed: {max}")]
    TooLong { length: usize, max: usize },

    #[error("input does not match the address pattern")]
    PatternMismatch,

    #[error("local part length {length} is outside 1..=64")]
    LocalLength { length: usize },

    #[error("local part contains consecutive dots")]
    LocalConsecutiveDots,

    #[error("local part starts or ends with a dot")]
    LocalEdgeDot,

    #[error("domain length {length} is outside 3..=255")]
    DomainLength { length: usize },

    #[error("domain contains consecutive dots")]
    DomainConsecutiveDots,

    #[error("domain needs at least two labels")]
    TooFewLabels,

    #[error("top-level domain is {length} characters, needs at least 2")]
    TopLevelTooShort { length: usize },

    #[error("domain label '{label}' contains invalid characters")]
    InvalidLabel { label: String },

    #[error("domain label '{label}' starts or ends with a hyphen")]
    LabelEdgeHyphen { label: String },
}

impl Rejection {
    /// Stable snake_case identifier, used in reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotText => "not_text",
            Self::Empty => "empty",
            Self::TooLong { .. } => "too_long",
            Self::PatternMismatch => "pattern_mismatch",
            Self::LocalLength { .. } => "local_length",
            Self::LocalConsecutiveDots => "local_consecutive_dots",
            Self::LocalEdgeDot => "local_edge_dot",
            Self::DomainLength { .. } => "domain_length",
            Self::DomainConsecutiveDots => "domain_consecutive_dots",
            Self::TooFewLabels => "too_few_labels",
            Self::TopLevelTooShort { .. } => "top_level_too_short",
            Self::InvalidLabel { .. } => "invalid_label",
            Self::LabelEdgeHyphen { .. } => "label_edge_hyphen",
        }
    }

    /// Which part of the address the rejection is about
    pub fn segment(&self) -> &'static str {
        match self {
            Self::NotText | Self::Empty | Self::TooLong { .. } | Self::PatternMismatch => "input",
            Self::LocalLength { .. } | Self::LocalConsecutiveDots | Self::LocalEdgeDot => "local",
            Self::DomainLength { .. }
            | Self::DomainConsecutiveDots
            | Self::TooFewLabels
            | Self::TopLevelTooShort { .. }
            | Self::InvalidLabel { .. }
            | Self::LabelEdgeHyphen { .. } => "domain",
        }
    }
}
