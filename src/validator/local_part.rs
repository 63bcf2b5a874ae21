use super::Rejection;

/// Longest local part accepted
pub const MAX_LOCAL_LENGTH: usize = 64;

/// Structural checks on the part before the first "@"
pub fn check_local_part(local: &str) -> Result<(), Rejection> {
    let length = local.chars().count();
    if length < 1 || length > MAX_LOCAL_LENGTH {
        return Err(Rejection::LocalLength { length });
    }

    if local.contains("..") {
        return Err(Rejection::LocalConsecutiveDots);
    }

    if local.starts_with('.') || local.ends_with('.') {
        return Err(Rejection::LocalEdgeDot);
    }

    Ok(())
}
