//! Mnemonic table: instructions, directives and register names

use std::collections::HashMap;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::AsmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MnemonicClass {
    /// `IS`
    Imperative,
    /// `AD`
    AssemblerDirective,
    /// `DL`
    DeclarationDirective,
    /// `RG`
    Register,
}

impl MnemonicClass {
    pub fn as_str(self) -> &'static str {
        match self {
            MnemonicClass::Imperative => "IS",
            MnemonicClass::AssemblerDirective => "AD",
            MnemonicClass::DeclarationDirective => "DL",
            MnemonicClass::Register => "RG",
        }
    }
}

impl fmt::Display for MnemonicClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MnemonicClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IS" => Ok(MnemonicClass::Imperative),
            "AD" => Ok(MnemonicClass::AssemblerDirective),
            "DL" => Ok(MnemonicClass::DeclarationDirective),
            "RG" => Ok(MnemonicClass::Register),
            other => Err(format!("unknown mnemonic class: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicEntry {
    pub mnemonic: String,
    pub code: String,
    pub class: MnemonicClass,
    /// Memory units taken by one encoded instance.
    pub length: u32,
}

impl MnemonicEntry {
    pub fn new(mnemonic: &str, code: &str, class: MnemonicClass, length: u32) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            code: code.to_string(),
            class,
            length,
        }
    }

    /// Whether the entry may stand in the mnemonic position of a statement.
    pub fn is_statement(&self) -> bool {
        self.class != MnemonicClass::Register
    }
}

#[derive(Debug, Clone, Default)]
pub struct MnemonicTable {
    entries: HashMap<String, MnemonicEntry>,
}

impl MnemonicTable {
    /// An empty table.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// The standard instruction, directive and register set.
    pub fn builtin() -> Self {
        use MnemonicClass::*;

        let mut table = Self::new();
        for (mnemonic, code, class, length) in [
            ("STOP", "00", Imperative, 1), ("ADD", "01", Imperative, 1),
            ("SUB", "02", Imperative, 1), ("MULTI", "03", Imperative, 1),
            ("MOVER", "04", Imperative, 1), ("MOVEM", "05", Imperative, 1),
            ("COMP", "06", Imperative, 1), ("BC", "07", Imperative, 1),
            ("DIV", "08", Imperative, 1), ("READ", "09", Imperative, 1),
            ("PRINT", "10", Imperative, 1),
            ("START", "01", AssemblerDirective, 0), ("END", "02", AssemblerDirective, 0),
            ("ORIGIN", "03", AssemblerDirective, 0), ("EQU", "04", AssemblerDirective, 0),
            ("LTORG", "05", AssemblerDirective, 0),
            ("DS", "01", DeclarationDirective, 1), ("DC", "02", DeclarationDirective, 1),
            ("AREG", "01", Register, 0), ("BREG", "02", Register, 0), ("CREG", "03", Register, 0),
        ] {
            table.register(MnemonicEntry::new(mnemonic, code, class, length));
        }
        table
    }

    /// Insert or overwrite by mnemonic.
    pub fn register(&mut self, entry: MnemonicEntry) {
        self.entries.insert(entry.mnemonic.clone(), entry);
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<&MnemonicEntry> {
        self.entries.get(mnemonic)
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.entries.contains_key(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by mnemonic.
    pub fn iter(&self) -> impl Iterator<Item = &MnemonicEntry> {
        let mut sorted: Vec<&MnemonicEntry> = self.entries.values().collect();
        sorted.sort_by(|a, b| a.mnemonic.cmp(&b.mnemonic));
        sorted.into_iter()
    }

    /// Parse a table from `MNEMONIC<TAB>CODE<TAB>CLASS<TAB>LENGTH` lines.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, AsmError> {
        let mut table = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = idx + 1;
            let l = line.trim();
            if l.is_empty() || l.starts_with(';') {
                continue;
            }
            let fields: Vec<&str> = l.split_whitespace().collect();
            if fields.len() != 4 {
                return Err(AsmError::MnemonicTable {
                    line: line_num,
                    reason: format!("expected 4 fields, found {}", fields.len()),
                });
            }
            let class = fields[2]
                .parse::<MnemonicClass>()
                .map_err(|reason| AsmError::MnemonicTable { line: line_num, reason })?;
            let length = fields[3].parse::<u32>().map_err(|_| AsmError::MnemonicTable {
                line: line_num,
                reason: format!("invalid length: {}", fields[3]),
            })?;
            table.register(MnemonicEntry::new(fields[0], fields[1], class, length));
        }
        Ok(table)
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        for e in self.iter() {
            writeln!(w, "{}\t{}\t{}\t{}", e.mnemonic, e.code, e.class, e.length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = MnemonicTable::builtin();
        let add = table.lookup("ADD").unwrap();
        assert_eq!(add.code, "01");
        assert_eq!(add.class, MnemonicClass::Imperative);
        assert_eq!(add.length, 1);

        let start = table.lookup("START").unwrap();
        assert_eq!(start.class, MnemonicClass::AssemblerDirective);
        assert_eq!(start.length, 0);

        assert_eq!(table.lookup("DS").unwrap().length, 1);
        assert_eq!(table.lookup("CREG").unwrap().class, MnemonicClass::Register);
        assert_eq!(table.len(), 21);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = MnemonicTable::builtin();
        assert!(table.contains("MOVER"));
        assert!(!table.contains("mover"));
        assert!(table.lookup("FOO").is_none());
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut table = MnemonicTable::new();
        table.register(MnemonicEntry::new("HALT", "00", MnemonicClass::Imperative, 1));
        table.register(MnemonicEntry::new("HALT", "99", MnemonicClass::Imperative, 2));
        assert_eq!(table.len(), 1);
        let e = table.lookup("HALT").unwrap();
        assert_eq!(e.code, "99");
        assert_eq!(e.length, 2);
    }

    #[test]
    fn test_registers_are_not_statements() {
        let table = MnemonicTable::builtin();
        assert!(!table.lookup("AREG").unwrap().is_statement());
        assert!(table.lookup("EQU").unwrap().is_statement());
    }

    #[test]
    fn test_write_then_read_table() {
        let table = MnemonicTable::builtin();
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("ADD\t01\tIS\t1\n"));

        let loaded = MnemonicTable::read_from(buf.as_slice()).unwrap();
        assert_eq!(loaded.len(), table.len());
        assert_eq!(loaded.lookup("ORIGIN"), table.lookup("ORIGIN"));
    }

    #[test]
    fn test_read_rejects_bad_class() {
        let src = "; custom set\nHALT 00 IS 1\n\nJUMP 01 XX 1\n";
        match MnemonicTable::read_from(src.as_bytes()) {
            Err(AsmError::MnemonicTable { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected: {:?}", other.map(|t| t.len())),
        }
    }
}
