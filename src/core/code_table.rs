// File: src/core/code_table.rs
use crate::core::types::{RootCodeEntry, RootColumn, RootToken};
use std::collections::HashMap;
use tracing::{info, trace};

/// Root-to-key assignments read from a `<code>\t<root>` dictionary.
///
/// The first definition of a root wins; later lines for the same root are ignored.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: HashMap<RootToken, RootCodeEntry>,
    /// Roots in the order they were first defined.
    order: Vec<RootToken>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole code table file.
    pub fn parse(text: &str, column: RootColumn) -> Self {
        let mut table = Self::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !table.read_line(line, column) {
                trace!(line, "skipping malformed code table line");
                skipped += 1;
            }
        }
        info!(roots = table.len(), skipped, "read code table");
        table
    }

    /// Reads one trimmed line. Returns `false` if the line was malformed.
    pub fn read_line(&mut self, line: &str, column: RootColumn) -> bool {
        let parts: Vec<&str> = line.split('\t').collect();
        let (code, rhs) = match (column, parts.as_slice()) {
            (RootColumn::Whole, [code, root]) => (*code, *root),
            (RootColumn::Split, [code, rhs, ..]) => (*code, *rhs),
            _ => return false,
        };
        let code = code.trim().to_lowercase();
        let mut chars = code.chars();
        let Some(primary_key) = chars.next() else {
            return false;
        };
        let rest: String = chars.collect();
        let secondary_key = if rest.is_empty() { None } else { Some(rest) };

        match column {
            RootColumn::Whole => {
                let root = rhs.trim();
                if root.is_empty() {
                    return false;
                }
                self.insert_if_absent(root, primary_key, &secondary_key);
            }
            RootColumn::Split => {
                for root in rhs.split_whitespace() {
                    self.insert_if_absent(root, primary_key, &secondary_key);
                }
            }
        }
        true
    }

    /// Stores the assignment unless the root is already known.
    pub fn insert_if_absent(&mut self, root: &str, primary_key: char, secondary_key: &Option<String>) {
        if self.entries.contains_key(root) {
            return;
        }
        self.entries.insert(
            root.to_string(),
            RootCodeEntry {
                root: root.to_string(),
                primary_key,
                secondary_key: secondary_key.clone(),
            },
        );
        self.order.push(root.to_string());
    }

    pub fn get(&self, root: &str) -> Option<&RootCodeEntry> {
        self.entries.get(root)
    }

    /// Iterates entries in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = &RootCodeEntry> {
        self.order.iter().filter_map(|root| self.entries.get(root))
    }

    pub fn order(&self) -> &[RootToken] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
