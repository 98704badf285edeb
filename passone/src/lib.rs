//! First pass of a two-pass assembler for a small teaching instruction set
//! (imperative statements `IS`, assembler directives `AD`, declarations `DL`,
//! registers `RG`), with optional table output (feature: "listing").
//!
//! One pass over the source assigns every statement and literal an address
//! and produces the tables the second pass needs:
//! - **Symbol table**: label → address; operands seen before their definition
//!   stay `Unresolved` until the label shows up.
//! - **Literal table**: distinct `=` operands in order of first use.
//! - **Pool table**: start address of every literal pool.
//! - **Intermediate code**: one `(address, mnemonic, operand)` record per
//!   statement plus one `LITERAL` record per placed literal.
//!
//! ## Directives
//! - `START n` – set the location counter to `n` (0 when omitted).
//! - `ORIGIN e` – set the location counter to `e` (`n`, `SYM+n` or `SYM-n`).
//! - `L EQU e` – define `L` as the value of `e`.
//! - `DS n` / `DC v` – reserve `n` units / one unit.
//! - `LTORG`, `END` – place the pending literal pool.
//!
//! Unknown mnemonics do not stop the run; they are reported as
//! [`Diagnostic`]s and the line is skipped.
//!
//! ## Optional Features
//! - `listing`: write the tables as tab-separated text and print them.
//!
//! ## Basic Usage
//! ```rust
//! use passone::Assembler;
//!
//! fn main() -> Result<(), passone::AsmError> {
//!     let assembler = Assembler::new();
//!     let src = r#"
//!         START 100
//!     L1  MOVER AREG, =5
//!         ADD   AREG, =5
//!         END
//!     "#;
//!
//!     let out = assembler.assemble(src)?;
//!     assert_eq!(out.symbols.resolve("L1"), Some(100));
//!     assert_eq!(out.literals.all(), ["=5"]);
//!     assert_eq!(out.pools.starts(), [102]);
//!     Ok(())
//! }
//! ```
//!
//! ## License
//! This project is released under [The Unlicense](https://unlicense.org/).
//! You are free to use it for any purpose, without restriction.

mod error;
mod opcodes;
mod symbol;
mod literal;
mod config;
mod directive;
mod parser;
mod eval;
mod intermediate;
mod assembler;
#[cfg(feature = "listing")]
mod listing;

/// Memory address / location counter value.
pub type Address = i64;

// Public exports
pub use error::{AsmError, Diagnostic, DiagnosticKind, ExprError};
pub use opcodes::{MnemonicClass, MnemonicEntry, MnemonicTable};
pub use symbol::{SymbolTable, SymbolValue};
pub use literal::{LiteralTable, PoolTable};
pub use config::{Config, PoolMode};
pub use directive::Directive;
pub use intermediate::{IntermediateRecord, Tag};
pub use assembler::{Assembler, PassOne, PassOneOutput};
#[cfg(feature = "listing")]
pub use listing::{INTERMEDIATE_FILE, LITERAL_FILE, POOL_FILE, SYMBOL_FILE};
