//! Literal and pool tables

use crate::Address;

/// Distinct `=` literals in order of first use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralTable {
    literals: Vec<String>,
    /// Index of the first literal not yet placed in a pool.
    pooled: usize,
}

impl LiteralTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `literal` unless the exact same text is already present.
    pub fn insert(&mut self, literal: &str) -> bool {
        if self.literals.iter().any(|l| l == literal) {
            return false;
        }
        self.literals.push(literal.to_string());
        true
    }

    pub fn all(&self) -> &[String] {
        &self.literals
    }

    /// Literals registered since the last pool was placed.
    pub fn pending(&self) -> &[String] {
        &self.literals[self.pooled..]
    }

    pub fn has_pending(&self) -> bool {
        self.pooled < self.literals.len()
    }

    pub fn mark_pooled(&mut self) {
        self.pooled = self.literals.len();
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// Start address of every flushed literal pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolTable {
    starts: Vec<Address>,
}

impl PoolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, start: Address) {
        self.starts.push(start);
    }

    pub fn starts(&self) -> &[Address] {
        &self.starts
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_by_exact_text() {
        let mut literals = LiteralTable::new();
        assert!(literals.insert("=5"));
        assert!(!literals.insert("=5"));
        assert!(literals.insert("=05"));
        assert_eq!(literals.all(), ["=5", "=05"]);
    }

    #[test]
    fn test_pending_tracks_pool_boundary() {
        let mut literals = LiteralTable::new();
        literals.insert("='1'");
        literals.insert("=2");
        assert_eq!(literals.pending().len(), 2);
        literals.mark_pooled();
        assert!(!literals.has_pending());

        literals.insert("=2");
        assert!(!literals.has_pending());
        literals.insert("=3");
        assert_eq!(literals.pending(), ["=3"]);
        assert_eq!(literals.len(), 3);
    }

    #[test]
    fn test_pool_starts_in_order() {
        let mut pools = PoolTable::new();
        pools.push(12);
        pools.push(20);
        assert_eq!(pools.starts(), [12, 20]);
    }
}
