// src/core/types.rs
use serde::Serialize;

/// A structural root. May be a single glyph, a multi-glyph alias, a
/// space-separated group of roots, or a private-use-area stand-in glyph.
pub type RootToken = String;

/// Maximum number of example characters kept per root while aggregating.
pub const MAX_EXAMPLES: usize = 10;

/// Examples borrowed from each constituent of a grouped root.
pub const EXAMPLES_PER_CONSTITUENT: usize = 3;

/// Upper bound on the synthesized examples of a grouped root.
pub const MAX_GROUP_EXAMPLES: usize = 15;

/// The key assignment of a root, as read from the code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootCodeEntry {
    pub root: RootToken,
    /// First character of the lowercased code.
    pub primary_key: char,
    /// The rest of the lowercased code, if any.
    pub secondary_key: Option<String>,
}

/// One character of the decomposition corpus with its roots in structural order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionEntry {
    pub character: String,
    pub roots: Vec<RootToken>,
}

/// Usage statistics of a single root across the decomposition corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStats {
    pub frequency: u64,
    /// The first characters seen containing this root, never more than [`MAX_EXAMPLES`].
    pub examples: Vec<String>,
}

impl RootStats {
    /// Keeps the character if the sample is not full yet.
    pub fn push_example(&mut self, character: &str) {
        if self.examples.len() < MAX_EXAMPLES {
            self.examples.push(character.to_string());
        }
    }
}

/// A row of the final lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootRecord {
    pub name: RootToken,
    /// Example characters, concatenated.
    pub rel: String,
    pub key: char,
    pub secondary: Option<String>,
}

/// A row of the per-character decomposition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChaifenRecord {
    pub name: String,
    pub comp: String,
    pub key: String,
}

/// How the assembled table is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Most used roots first; ties keep code-table order.
    FrequencyRanked,
    /// The order roots first appear in the code table.
    SourceOrder,
}

/// How the right-hand column of a code table line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootColumn {
    /// The whole column is one root (possibly a space-separated group).
    Whole,
    /// Every whitespace-separated token is its own root sharing the line's code.
    Split,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_are_capped() {
        let mut stats = RootStats::default();
        for i in 0..25 {
            stats.push_example(&format!("c{}", i));
        }
        assert_eq!(MAX_EXAMPLES, stats.examples.len());
        assert_eq!("c0", stats.examples[0]);
        assert_eq!("c9", stats.examples[9]);
    }

    #[test]
    fn record_serializes_absent_secondary_as_null() {
        let record = RootRecord {
            name: "人".to_string(),
            rel: "众".to_string(),
            key: 'a',
            secondary: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(r#"{"name":"人","rel":"众","key":"a","secondary":null}"#, json);
    }
}
