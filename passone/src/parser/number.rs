//! Integer parsing for operands

use crate::Address;
use crate::error::ExprError;

pub struct NumberParser;

impl NumberParser {
    /// Parse a signed decimal integer (`42`, `+42`, `-42`).
    pub fn parse(s: &str) -> Result<Address, ExprError> {
        let trimmed = s.trim();
        trimmed
            .parse::<Address>()
            .map_err(|_| ExprError::InvalidNumber(trimmed.to_string()))
    }
}
