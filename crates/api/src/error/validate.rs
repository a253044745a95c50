//! Validation utilities shared by every codec entry point

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_argument(context, reason));
    }
    Ok(())
}

/// Validate that a key is usable for a transform
///
/// The key may be any length except zero.
#[inline(always)]
pub fn key(key: &[u8], context: &'static str) -> Result<()> {
    parameter(!key.is_empty(), context, "key must not be empty")
}
