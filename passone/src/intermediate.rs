//! Intermediate code handed to the second pass

use std::fmt;

use crate::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Mnemonic(String),
    /// A literal placed by a pool flush.
    Literal,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Mnemonic(m) => f.write_str(m),
            Tag::Literal => f.write_str("LITERAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateRecord {
    pub address: Address,
    pub tag: Tag,
    pub operand: Option<String>,
}

impl IntermediateRecord {
    pub fn statement(address: Address, mnemonic: &str, operand: Option<String>) -> Self {
        Self { address, tag: Tag::Mnemonic(mnemonic.to_string()), operand }
    }

    pub fn literal(address: Address, literal: &str) -> Self {
        Self { address, tag: Tag::Literal, operand: Some(literal.to_string()) }
    }
}

/// Tab-separated `address tag operand`.
impl fmt::Display for IntermediateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.address,
            self.tag,
            self.operand.as_deref().unwrap_or("")
        )
    }
}
