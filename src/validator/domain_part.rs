use regex::Regex;

use super::Rejection;

/// Shortest domain accepted
pub const MIN_DOMAIN_LENGTH: usize = 3;
/// Longest domain accepted
pub const MAX_DOMAIN_LENGTH: usize = 255;
/// Shortest top-level label accepted
pub const MIN_TLD_LENGTH: usize = 2;

/// Label character class, anchored on both ends
pub(crate) const LABEL_PATTERN: &str = r"^[a-zA-Z0-9-]+$";

/// Structural checks on the part after the first "@".
///
/// `label_pattern` must be the compiled [`LABEL_PATTERN`].
pub fn check_domain_part(domain: &str, label_pattern: &Regex) -> Result<(), Rejection> {
    let length = domain.chars().count();
    if length < MIN_DOMAIN_LENGTH || length > MAX_DOMAIN_LENGTH {
        return Err(Rejection::DomainLength { length });
    }

    if domain.contains("..") {
        return Err(Rejection::DomainConsecutiveDots);
    }

    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return Err(Rejection::TooFewLabels);
    }

    // split always yields at least one item
    let tld_length = labels.last().map_or(0, |tld| tld.chars().count());
    if tld_length < MIN_TLD_LENGTH {
        return Err(Rejection::TopLevelTooShort { length: tld_length });
    }

    for label in &labels {
        if !label_pattern.is_match(label) {
            return Err(Rejection::InvalidLabel { label: label.to_string() });
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(Rejection::LabelEdgeHyphen { label: label.to_string() });
        }
    }

    Ok(())
}
