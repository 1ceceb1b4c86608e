//! Resolution of the `sheet!range` address a call operates on.

use crate::error::{SheetsError, SheetsResult};
use std::fmt;

/// A sheet name and range expression, rendered as `sheet!range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveAddress {
    pub sheet: String,
    pub range: String,
}

impl EffectiveAddress {
    pub fn new(sheet: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            range: range.into(),
        }
    }
}

impl fmt::Display for EffectiveAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.range)
    }
}

/// Compute the address for one call.
///
/// `bound_sheet` is the connection's live sheet identity and
/// `connection_range` its configured range. Rules:
///
/// | call sheet | call range | result                                   |
/// |------------|------------|------------------------------------------|
/// | yes        | yes        | `call_sheet!call_range`                  |
/// | no         | yes        | `bound_sheet!call_range`, error if unbound |
/// | yes        | no         | always an error                          |
/// | no         | no         | `bound_sheet!connection_range`, error if either is missing |
pub fn resolve_address(
    bound_sheet: Option<&str>,
    connection_range: Option<&str>,
    call_sheet: Option<&str>,
    call_range: Option<&str>,
) -> SheetsResult<EffectiveAddress> {
    let address = match (call_sheet, call_range) {
        (Some(sheet), Some(range)) => EffectiveAddress::new(sheet, range),
        (None, Some(range)) => {
            EffectiveAddress::new(bound_sheet.ok_or(SheetsError::AmbiguousAddress)?, range)
        }
        // A call-level sheet would silently reuse a range meant for another sheet.
        (Some(_), None) => return Err(SheetsError::AmbiguousAddress),
        (None, None) => match (bound_sheet, connection_range) {
            (Some(sheet), Some(range)) => EffectiveAddress::new(sheet, range),
            _ => return Err(SheetsError::AmbiguousAddress),
        },
    };

    tracing::debug!(%address, "resolved address");
    Ok(address)
}
