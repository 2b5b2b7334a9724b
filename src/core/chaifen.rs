// File: src/core/chaifen.rs
use crate::core::types::ChaifenRecord;
use std::collections::HashMap;
use tracing::info;

/// Per-character view joining raw decompositions with full input codes.
#[derive(Debug, Clone, Default)]
pub struct ChaifenTable {
    /// Character -> raw decomposition text, later lines replacing earlier ones.
    decompositions: HashMap<String, String>,
    /// Character -> full code.
    full_codes: HashMap<String, String>,
}

impl ChaifenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<char>\t<decomposition>` lines.
    pub fn load_decompositions(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if let Some((character, comp)) = line.split_once('\t') {
                self.decompositions.insert(character.to_string(), comp.to_string());
            }
        }
        info!(characters = self.decompositions.len(), "read decompositions");
    }

    /// Loads `<char>\t<code>[\t...]` lines.
    pub fn load_full_codes(&mut self, text: &str) {
        for line in text.lines() {
            let mut parts = line.trim().split('\t');
            if let (Some(character), Some(code)) = (parts.next(), parts.next()) {
                self.full_codes.insert(character.to_string(), code.to_string());
            }
        }
        info!(characters = self.full_codes.len(), "read full codes");
    }

    /// One record per decomposed character that has a full code, sorted by character.
    pub fn records(&self) -> Vec<ChaifenRecord> {
        let mut records: Vec<ChaifenRecord> = self
            .decompositions
            .iter()
            .filter_map(|(character, comp)| {
                self.full_codes.get(character).map(|key| ChaifenRecord {
                    name: character.clone(),
                    comp: comp.clone(),
                    key: key.clone(),
                })
            })
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        info!(records = records.len(), "assembled chaifen table");
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_sorts_by_character() {
        let mut table = ChaifenTable::new();
        table.load_decompositions("明\t日月\n好\t女子\n林\t木木\n林\t木 木\nbad\n");
        table.load_full_codes("明\trm\textra\n好\tnz\n众\trrr\nlonely\n");

        let records = table.records();
        assert_eq!(2, records.len());
        assert_eq!("好", records[0].name);
        assert_eq!("女子", records[0].comp);
        assert_eq!("nz", records[0].key);
        assert_eq!("明", records[1].name);
        assert_eq!("rm", records[1].key);
    }

    #[test]
    fn later_decomposition_wins() {
        let mut table = ChaifenTable::new();
        table.load_decompositions("林\t木木\n林\t木 木\n");
        table.load_full_codes("林\tmm\n");
        assert_eq!("木 木", table.records()[0].comp);
    }
}
