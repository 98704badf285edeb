//! Pass one: location counter, symbol/literal/pool tables, intermediate code

use std::fs;
use std::path::Path;

use log::{debug, error, info};

use crate::Address;
use crate::config::{Config, PoolMode};
use crate::directive::Directive;
use crate::error::{AsmError, Diagnostic, DiagnosticKind, ExprError};
use crate::eval::ExpressionEvaluator;
use crate::intermediate::IntermediateRecord;
use crate::literal::{LiteralTable, PoolTable};
use crate::opcodes::MnemonicTable;
use crate::parser::{ExpressionParser, NumberParser, Statement, is_symbol_name, parse_line};
use crate::symbol::SymbolTable;

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOneOutput {
    pub symbols: SymbolTable,
    pub literals: LiteralTable,
    pub pools: PoolTable,
    pub intermediate: Vec<IntermediateRecord>,
    /// Non-fatal line problems, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Location counter after the last pool.
    pub location: Address,
}

impl PassOneOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// State of a single run. `process` consumes it, so a run always starts fresh.
pub struct PassOne<'t> {
    mnemonics: &'t MnemonicTable,
    pool_mode: PoolMode,
    location: Address,
    symbols: SymbolTable,
    literals: LiteralTable,
    pools: PoolTable,
    intermediate: Vec<IntermediateRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> PassOne<'t> {
    pub fn new(mnemonics: &'t MnemonicTable, config: Config) -> Self {
        Self {
            mnemonics,
            pool_mode: config.pool_mode,
            location: config.start_address,
            symbols: SymbolTable::new(),
            literals: LiteralTable::new(),
            pools: PoolTable::new(),
            intermediate: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn process<I, S>(mut self, lines: I) -> Result<PassOneOutput, AsmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line_count = 0;
        for (idx, raw) in lines.into_iter().enumerate() {
            line_count = idx + 1;
            self.process_line(raw.as_ref(), line_count)?;
        }

        // Input without END, or literals that appeared after the last pool.
        if self.pools.is_empty() || self.literals.has_pending() {
            self.flush_pool(line_count)?;
        }

        Ok(PassOneOutput {
            symbols: self.symbols,
            literals: self.literals,
            pools: self.pools,
            intermediate: self.intermediate,
            diagnostics: self.diagnostics,
            location: self.location,
        })
    }

    fn process_line(&mut self, raw: &str, line: usize) -> Result<(), AsmError> {
        let Some(stmt) = parse_line(raw, self.mnemonics) else {
            return Ok(());
        };

        if let Some(label) = stmt.label {
            self.symbols.define(label, self.location);
        }
        let Some(mnemonic) = stmt.mnemonic else {
            self.diagnose(line, DiagnosticKind::MissingMnemonic, "", raw);
            return Ok(());
        };

        let address = self.location;
        let mnemonics = self.mnemonics;
        match mnemonics.lookup(mnemonic).filter(|e| e.is_statement()) {
            Some(entry) => {
                self.register_operand(&stmt);
                debug!("{:>5}: {} {}", address, mnemonic, stmt.operand.as_deref().unwrap_or(""));
                self.intermediate.push(IntermediateRecord::statement(
                    address,
                    mnemonic,
                    stmt.operand.clone(),
                ));
                self.location = advance(address, Address::from(entry.length), line)?;
            }
            None => {
                // `FOO AREG`: the unknown FOO was read as the label.
                let token = match (stmt.label, mnemonics.lookup(mnemonic)) {
                    (Some(label), Some(_)) => label,
                    _ => mnemonic,
                };
                self.diagnose(line, DiagnosticKind::UnknownMnemonic, token, raw);
            }
        }

        if let Ok(directive) = mnemonic.parse::<Directive>() {
            self.apply_directive(directive, &stmt, address, line)?;
        }
        Ok(())
    }

    fn register_operand(&mut self, stmt: &Statement<'_>) {
        let Some(target) = stmt.target() else {
            return;
        };
        if target.starts_with('=') {
            if self.literals.insert(target) {
                debug!("new literal {}", target);
            }
        } else if is_symbol_name(target) && !self.mnemonics.contains(target) {
            self.symbols.reference(target);
        }
    }

    fn apply_directive(
        &mut self,
        directive: Directive,
        stmt: &Statement<'_>,
        address: Address,
        line: usize,
    ) -> Result<(), AsmError> {
        match directive {
            Directive::Start => {
                self.location = match stmt.operand.as_deref() {
                    Some(text) => NumberParser::parse(text)
                        .map_err(|e| malformed(line, "START", text, e))?,
                    None => 0,
                };
                debug!("START: location counter set to {}", self.location);
            }
            Directive::End | Directive::Ltorg => self.flush_pool(line)?,
            Directive::Origin => {
                let text = required_operand(stmt, "ORIGIN", line)?;
                self.location = self
                    .evaluate(text)
                    .map_err(|e| malformed(line, "ORIGIN", text, e))?;
                debug!("ORIGIN: location counter set to {}", self.location);
            }
            Directive::Equ => {
                if let Some(label) = stmt.label {
                    let text = required_operand(stmt, "EQU", line)?;
                    let value = self.evaluate(text).map_err(|e| malformed(line, "EQU", text, e))?;
                    self.symbols.define(label, value);
                    debug!("EQU: {} = {}", label, value);
                }
            }
            Directive::Ds => {
                let text = required_operand(stmt, "DS", line)?;
                let size = NumberParser::parse(text).map_err(|e| malformed(line, "DS", text, e))?;
                if size < 0 {
                    return Err(malformed(line, "DS", text, ExprError::NegativeSize(size)));
                }
                self.location = advance(address, size, line)?;
            }
            Directive::Dc => self.location = advance(address, 1, line)?,
        }
        Ok(())
    }

    fn evaluate(&self, text: &str) -> Result<Address, ExprError> {
        let expr = ExpressionParser::parse(text)?;
        ExpressionEvaluator::new(&self.symbols).evaluate(&expr)
    }

    /// Place literals at the location counter and open a new pool entry.
    fn flush_pool(&mut self, line: usize) -> Result<(), AsmError> {
        let start = self.location;
        self.pools.push(start);

        let placed = match self.pool_mode {
            PoolMode::Cumulative => self.literals.all(),
            PoolMode::PerPool => self.literals.pending(),
        };
        info!("pool {} at {}: {} literal(s)", self.pools.len(), start, placed.len());
        for literal in placed {
            self.intermediate.push(IntermediateRecord::literal(self.location, literal));
            self.location = advance(self.location, 1, line)?;
        }
        self.literals.mark_pooled();
        Ok(())
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind, token: &str, text: &str) {
        let diag = Diagnostic {
            line,
            kind,
            token: token.to_string(),
            text: text.trim().to_string(),
        };
        error!("{}", diag);
        self.diagnostics.push(diag);
    }
}

fn advance(base: Address, by: Address, line: usize) -> Result<Address, AsmError> {
    base.checked_add(by).ok_or(AsmError::AddressOverflow { line })
}

fn required_operand<'s>(
    stmt: &'s Statement<'_>,
    mnemonic: &str,
    line: usize,
) -> Result<&'s str, AsmError> {
    stmt.operand.as_deref().ok_or_else(|| AsmError::MissingOperand {
        line,
        mnemonic: mnemonic.to_string(),
    })
}

fn malformed(line: usize, mnemonic: &str, text: &str, source: ExprError) -> AsmError {
    AsmError::MalformedExpression {
        line,
        mnemonic: mnemonic.to_string(),
        text: text.to_string(),
        source,
    }
}

/// Runs pass one with a fixed mnemonic table and configuration.
pub struct Assembler {
    mnemonics: MnemonicTable,
    config: Config,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self::with_table(MnemonicTable::builtin())
    }

    pub fn with_table(mnemonics: MnemonicTable) -> Self {
        Self {
            mnemonics,
            config: Config::default(),
        }
    }

    // ===== Configuration =====

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_origin(&mut self, addr: Address) {
        self.config.start_address = addr;
    }

    pub fn origin(&self) -> Address {
        self.config.start_address
    }

    pub fn set_pool_mode(&mut self, mode: PoolMode) {
        self.config.pool_mode = mode;
    }

    pub fn mnemonics(&self) -> &MnemonicTable {
        &self.mnemonics
    }

    // ===== Running =====

    pub fn assemble(&self, src: &str) -> Result<PassOneOutput, AsmError> {
        self.assemble_lines(src.lines())
    }

    pub fn assemble_lines<I, S>(&self, lines: I) -> Result<PassOneOutput, AsmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PassOne::new(&self.mnemonics, self.config).process(lines)
    }

    pub fn assemble_file<P: AsRef<Path>>(&self, path: P) -> Result<PassOneOutput, AsmError> {
        let src = fs::read_to_string(path)?;
        self.assemble(&src)
    }
}
