//! Expression evaluation with symbol resolution

use crate::Address;
use crate::error::ExprError;
use crate::parser::expression::Expr;
use crate::symbol::{SymbolTable, SymbolValue};

pub struct ExpressionEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> ExpressionEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Address, ExprError> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Add(name, offset) => self
                .symbol(name)?
                .checked_add(*offset)
                .ok_or(ExprError::Overflow),
            Expr::Sub(name, offset) => self
                .symbol(name)?
                .checked_sub(*offset)
                .ok_or(ExprError::Overflow),
        }
    }

    fn symbol(&self, name: &str) -> Result<Address, ExprError> {
        match self.symbols.get(name) {
            Some(SymbolValue::Resolved(addr)) => Ok(addr),
            Some(SymbolValue::Unresolved) => Err(ExprError::UnresolvedSymbol(name.to_string())),
            None => Err(ExprError::UndefinedSymbol(name.to_string())),
        }
    }
}
