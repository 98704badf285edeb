//! Symbol table for labels and forward references

use std::collections::HashMap;
use std::fmt;

use crate::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolValue {
    Resolved(Address),
    /// Referenced as an operand, not defined yet.
    Unresolved,
}

impl SymbolValue {
    pub fn address(self) -> Option<Address> {
        match self {
            SymbolValue::Resolved(addr) => Some(addr),
            SymbolValue::Unresolved => None,
        }
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolValue::Resolved(addr) => write!(f, "{}", addr),
            SymbolValue::Unresolved => f.write_str("unresolved"),
        }
    }
}

/// Symbols in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, SymbolValue)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `addr`, replacing whatever was there.
    pub fn define(&mut self, name: &str, addr: Address) {
        self.set(name, SymbolValue::Resolved(addr));
    }

    /// Record a use of `name`; an existing entry is left alone.
    pub fn reference(&mut self, name: &str) {
        if !self.index.contains_key(name) {
            self.set(name, SymbolValue::Unresolved);
        }
    }

    fn set(&mut self, name: &str, value: SymbolValue) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<SymbolValue> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn resolve(&self, name: &str) -> Option<Address> {
        self.get(name).and_then(SymbolValue::address)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Names still waiting for a definition.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| *value == SymbolValue::Unresolved)
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_reference_then_definition() {
        let mut symbols = SymbolTable::new();
        symbols.reference("LOOP");
        assert_eq!(symbols.get("LOOP"), Some(SymbolValue::Unresolved));
        assert_eq!(symbols.resolve("LOOP"), None);

        symbols.define("LOOP", 104);
        assert_eq!(symbols.get("LOOP"), Some(SymbolValue::Resolved(104)));
        assert_eq!(symbols.unresolved().count(), 0);
    }

    #[test]
    fn test_reference_keeps_resolved_value() {
        let mut symbols = SymbolTable::new();
        symbols.define("N", 7);
        symbols.reference("N");
        assert_eq!(symbols.resolve("N"), Some(7));
    }

    #[test]
    fn test_latest_definition_wins() {
        let mut symbols = SymbolTable::new();
        symbols.define("A", 1);
        symbols.define("A", 9);
        assert_eq!(symbols.resolve("A"), Some(9));
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn test_first_appearance_order() {
        let mut symbols = SymbolTable::new();
        symbols.reference("Z");
        symbols.define("A", 0);
        symbols.define("Z", 3);
        let names: Vec<&str> = symbols.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Z", "A"]);
    }

    #[test]
    fn test_unresolved_listing() {
        let mut symbols = SymbolTable::new();
        symbols.reference("X");
        symbols.define("Y", 2);
        symbols.reference("W");
        let pending: Vec<&str> = symbols.unresolved().collect();
        assert_eq!(pending, ["X", "W"]);
        assert_eq!(SymbolValue::Unresolved.to_string(), "unresolved");
    }
}
