//! Input validation for the base number.

use numtable_model::{NumTableError, Result};

/// Parse the raw number text into a validated base number.
///
/// - Empty or whitespace-only text is the idle state: `Ok(None)`.
/// - A strictly positive integer parses to `Ok(Some(n))`.
/// - Anything else (non-numeric, zero, negative, fractional) is
///   [`NumTableError::InvalidNumberInput`].
pub fn parse_base(input: &str) -> Result<Option<u64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => Ok(Some(n as u64)),
        _ => Err(NumTableError::InvalidNumberInput {
            input: input.to_string(),
        }),
    }
}
