//! Parser module for assembly source

pub mod lexer;
pub mod number;
pub mod expression;

pub use lexer::{parse_line, is_symbol_name, Statement};
pub use number::NumberParser;
pub use expression::ExpressionParser;
