// File: src/core/assembler.rs
use crate::core::aggregator::RootAggregator;
use crate::core::code_table::CodeTable;
use crate::core::types::{
    OrderPolicy, RootCodeEntry, RootRecord, EXAMPLES_PER_CONSTITUENT, MAX_GROUP_EXAMPLES,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Joins the code table with aggregated usage into the final lookup table.
pub struct TableAssembler<'a> {
    codes: &'a CodeTable,
    usage: &'a RootAggregator,
}

impl<'a> TableAssembler<'a> {
    pub fn new(codes: &'a CodeTable, usage: &'a RootAggregator) -> Self {
        Self { codes, usage }
    }

    /// Builds one record per coded root, ordered by `policy`.
    pub fn assemble(&self, policy: OrderPolicy) -> Vec<RootRecord> {
        let mut ranked: Vec<(RootRecord, u64)> = self
            .codes
            .order()
            .iter()
            .filter_map(|root| self.codes.get(root))
            .map(|entry| (self.record_for(entry), self.usage.frequency(&entry.root)))
            .collect();

        if policy == OrderPolicy::FrequencyRanked {
            // Stable, so equal counts keep code-table order.
            ranked.sort_by_key(|&(_, frequency)| std::cmp::Reverse(frequency));
        }

        let records: Vec<RootRecord> = ranked.into_iter().map(|(record, _)| record).collect();
        info!(records = records.len(), ?policy, "assembled root table");
        for record in records.iter().take(5) {
            debug!(name = %record.name, key = %record.key, rel = %record.rel);
        }
        records
    }

    fn record_for(&self, entry: &RootCodeEntry) -> RootRecord {
        let mut rel = self.usage.examples(&entry.root).concat();
        if rel.is_empty() && is_group(&entry.root) {
            rel = self.group_examples(&entry.root);
        }
        RootRecord {
            name: entry.root.clone(),
            rel,
            key: entry.primary_key,
            secondary: entry.secondary_key.clone(),
        }
    }

    /// Borrows the first few examples of each constituent of a grouped root.
    pub fn group_examples(&self, group: &str) -> String {
        let mut seen = HashSet::new();
        let mut collected: Vec<&str> = Vec::new();
        for constituent in group.split_whitespace() {
            for example in self.usage.examples(constituent).iter().take(EXAMPLES_PER_CONSTITUENT) {
                if seen.insert(example.as_str()) {
                    collected.push(example);
                }
            }
        }
        collected.truncate(MAX_GROUP_EXAMPLES);
        collected.concat()
    }
}

/// A root whose name lists several roots separated by spaces.
fn is_group(root: &str) -> bool {
    root.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::parse_corpus;
    use crate::core::types::{DecompositionEntry, RootColumn};

    fn build(codes: &str, corpus: &str, policy: OrderPolicy) -> Vec<RootRecord> {
        let codes = CodeTable::parse(codes, RootColumn::Whole);
        let usage = RootAggregator::from_entries(&parse_corpus(corpus));
        TableAssembler::new(&codes, &usage).assemble(policy)
    }

    #[test]
    fn frequency_ranked_orders_by_usage() {
        let records = build("bc\t入\na\t人\n", "众\t人 人 入\n", OrderPolicy::FrequencyRanked);
        assert_eq!(2, records.len());

        assert_eq!("人", records[0].name);
        assert_eq!("众", records[0].rel);
        assert_eq!('a', records[0].key);
        assert_eq!(None, records[0].secondary);

        assert_eq!("入", records[1].name);
        assert_eq!("众", records[1].rel);
        assert_eq!('b', records[1].key);
        assert_eq!(Some("c".to_string()), records[1].secondary);
    }

    #[test]
    fn frequency_ties_keep_code_table_order() {
        let records = build("a\t日\nb\t月\nc\t木\n", "明\t日 月\n", OrderPolicy::FrequencyRanked);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["日", "月", "木"], names);
        assert_eq!("", records[2].rel);
    }

    #[test]
    fn source_order_ignores_frequency() {
        let records = build("a\t木\nb\t人\n", "众\t人 人 人\n", OrderPolicy::SourceOrder);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["木", "人"], names);
    }

    #[test]
    fn uncoded_roots_are_dropped() {
        let records = build("a\t人\n", "众\t人 人 入\n", OrderPolicy::FrequencyRanked);
        assert_eq!(1, records.len());
        assert_eq!("人", records[0].name);
    }

    #[test]
    fn group_without_hits_borrows_constituent_examples() {
        let corpus = "众\t人 人 人\n从\t人 人\n内\t冂 入\n";
        let records = build("k\t人 入\n", corpus, OrderPolicy::SourceOrder);
        assert_eq!("人 入", records[0].name);
        assert_eq!("众从内", records[0].rel);
    }

    #[test]
    fn group_examples_take_three_each_and_deduplicate() {
        let corpus = "一\t甲\n二\t甲 乙\n三\t甲\n四\t甲\n五\t乙\n六\t乙\n";
        let records = build("k\t甲 乙\n", corpus, OrderPolicy::SourceOrder);
        assert_eq!("一二三五六", records[0].rel);
    }

    #[test]
    fn group_examples_are_capped() {
        let mut corpus = String::new();
        let mut codes = String::new();
        let mut group = Vec::new();
        for i in 0..8 {
            let root = format!("r{}", i);
            for j in 0..3 {
                corpus.push_str(&format!("{}\t{} x\n", char::from_u32(0x4E00 + i * 3 + j).unwrap(), root));
            }
            group.push(root);
        }
        codes.push_str(&format!("k\t{}\n", group.join(" ")));
        let records = build(&codes, &corpus, OrderPolicy::SourceOrder);
        assert_eq!(MAX_GROUP_EXAMPLES, records[0].rel.chars().count());
    }

    #[test]
    fn group_with_direct_hits_keeps_them() {
        let codes = CodeTable::parse("k\t人 入\n", RootColumn::Whole);
        let mut usage = RootAggregator::from_entries(&parse_corpus("众\t人 人\n"));
        usage.add_entry(&DecompositionEntry {
            character: "怪".to_string(),
            roots: vec!["人 入".to_string()],
        });
        let records = TableAssembler::new(&codes, &usage).assemble(OrderPolicy::SourceOrder);
        assert_eq!("怪", records[0].rel);
    }
}
