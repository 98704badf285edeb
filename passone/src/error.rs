//! Error types for the assembler

use std::fmt;

use thiserror::Error;

/// Failure evaluating an operand expression or integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("invalid integer: {0:?}")]
    InvalidNumber(String),
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),
    #[error("symbol {0} is not resolved yet")]
    UnresolvedSymbol(String),
    #[error("negative size: {0}")]
    NegativeSize(crate::Address),
    #[error("value out of range")]
    Overflow,
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum AsmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed operand {text:?} for {mnemonic}: {source}")]
    MalformedExpression {
        line: usize,
        mnemonic: String,
        text: String,
        #[source]
        source: ExprError,
    },
    #[error("line {line}: {mnemonic} requires an operand")]
    MissingOperand { line: usize, mnemonic: String },
    #[error("line {line}: location counter overflow")]
    AddressOverflow { line: usize },
    #[error("mnemonic table line {line}: {reason}")]
    MnemonicTable { line: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Mnemonic position holds something that is not an instruction or directive.
    UnknownMnemonic,
    /// A label with nothing after it.
    MissingMnemonic,
}

/// A line-level problem that does not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The offending token (empty for `MissingMnemonic`).
    pub token: String,
    /// The source line as written.
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownMnemonic => write!(
                f,
                "Error: Invalid mnemonic {} at line {}: {}",
                self.token, self.line, self.text
            ),
            DiagnosticKind::MissingMnemonic => {
                write!(f, "Error: Missing mnemonic at line {}: {}", self.line, self.text)
            }
        }
    }
}
