//! Splitting source lines into label, mnemonic and operand

use crate::opcodes::MnemonicTable;

/// One source statement, borrowed from its line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement<'a> {
    pub label: Option<&'a str>,
    /// `None` when the line holds only a label.
    pub mnemonic: Option<&'a str>,
    /// Every token after the mnemonic, joined by single spaces.
    pub operand: Option<String>,
}

impl Statement<'_> {
    /// The operand part that names a symbol or literal: the text after the
    /// last comma (`AREG, =5` gives `=5`), or the whole operand.
    pub fn target(&self) -> Option<&str> {
        let operand = self.operand.as_deref()?;
        let target = match operand.rsplit_once(',') {
            Some((_, rest)) => rest.trim(),
            None => operand,
        };
        (!target.is_empty()).then_some(target)
    }
}

/// Parse a line; `None` for blank and comment lines.
///
/// The first token is a label unless it is a known mnemonic. Anything
/// after `;` is a comment.
pub fn parse_line<'a>(line: &'a str, mnemonics: &MnemonicTable) -> Option<Statement<'a>> {
    let l = line.split(';').next().unwrap_or("").trim();
    if l.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = l.split_whitespace().collect();
    let (label, rest) = if mnemonics.contains(tokens[0]) {
        (None, &tokens[..])
    } else {
        (Some(tokens[0]), &tokens[1..])
    };
    let mnemonic = rest.first().copied();
    let operand = if rest.len() > 1 {
        Some(rest[1..].join(" "))
    } else {
        None
    };

    Some(Statement { label, mnemonic, operand })
}

/// Plain identifier: letter or `_` first, then letters, digits or `_`.
pub fn is_symbol_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
