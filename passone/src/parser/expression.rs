//! Operand expressions for ORIGIN and EQU

use super::number::NumberParser;
use crate::Address;
use crate::error::ExprError;

/// `n`, `SYM+n` or `SYM-n`. Nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(Address),
    Add(String, Address),
    Sub(String, Address),
}

pub struct ExpressionParser;

impl ExpressionParser {
    /// `+` is looked for before `-`; the split happens at the first occurrence.
    pub fn parse(s: &str) -> Result<Expr, ExprError> {
        let s = s.trim();

        if let Some((symbol, offset)) = s.split_once('+') {
            return Ok(Expr::Add(symbol_part(s, symbol)?, NumberParser::parse(offset)?));
        }
        if let Some((symbol, offset)) = s.split_once('-') {
            return Ok(Expr::Sub(symbol_part(s, symbol)?, NumberParser::parse(offset)?));
        }
        Ok(Expr::Number(NumberParser::parse(s)?))
    }
}

fn symbol_part(expr: &str, symbol: &str) -> Result<String, ExprError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ExprError::InvalidNumber(expr.to_string()));
    }
    Ok(symbol.to_string())
}
