use crate::config::{AliasConversionConfig, ChaifenConfig, ProfileConfig};
use crate::core::{
    aggregator::RootAggregator, alias::AliasMap, assembler::TableAssembler, chaifen::ChaifenTable,
    code_table::CodeTable, tokenizer::parse_corpus,
};
use crate::core::types::{OrderPolicy, RootColumn, RootRecord};
use crate::error::Result;
use crate::persistence::{read_text, save_json, save_lines};
use std::path::Path;
use tracing::info;

// The table engine owns the code table and the usage statistics; the
// assembler only borrows them when records are requested.
pub struct ZigenEngine {
    pub code_table: CodeTable,
    pub usage: RootAggregator,
    order: OrderPolicy,
}

impl ZigenEngine {
    /// Builds the engine from already loaded dictionary text.
    pub fn from_sources(codes: &str, corpus: &str, column: RootColumn, order: OrderPolicy) -> Self {
        let code_table = CodeTable::parse(codes, column);
        let usage = RootAggregator::from_entries(&parse_corpus(corpus));
        Self { code_table, usage, order }
    }

    /// Loads both dictionaries named by `config`, alias-normalizing them first
    /// when an alias table is configured.
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        let mut codes = read_text(&config.code_table)?;
        let mut corpus = read_text(&config.decomposition)?;

        if let Some(alias_path) = &config.alias_table {
            let aliases = AliasMap::parse(&read_text(alias_path)?);
            codes = aliases.convert_code_table_lines(&codes).join("\n");
            corpus = aliases.convert_decomposition_lines(&corpus).join("\n");
        }

        Ok(Self::from_sources(&codes, &corpus, config.root_column, config.order))
    }

    pub fn records(&self) -> Vec<RootRecord> {
        TableAssembler::new(&self.code_table, &self.usage).assemble(self.order)
    }

    /// Writes the assembled table and returns the number of records.
    pub fn save_table(&self, path: &Path) -> Result<usize> {
        let records = self.records();
        save_json(&records, path)?;
        info!(path = %path.display(), records = records.len(), "wrote root table");
        Ok(records.len())
    }
}

/// Builds and writes the root table of one dictionary variant.
pub fn build_table(config: &ProfileConfig) -> Result<usize> {
    ZigenEngine::from_config(config)?.save_table(&config.output)
}

/// Line counts of the two files written by [`AliasConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub decomposition_lines: usize,
    pub code_table_lines: usize,
}

/// Rewrites a decomposition file and a code table into their alias-normalized forms.
pub struct AliasConverter {
    aliases: AliasMap,
}

impl AliasConverter {
    pub fn new(aliases: AliasMap) -> Self {
        Self { aliases }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(AliasMap::parse(&read_text(path)?)))
    }

    /// Each output is written on its own; a failure on the second leaves the first in place.
    pub fn convert(&self, config: &AliasConversionConfig) -> Result<ConversionSummary> {
        let decomposition = read_text(&config.decomposition)?;
        let codes = read_text(&config.code_table)?;

        let new_decomposition = self.aliases.convert_decomposition_lines(&decomposition);
        save_lines(&new_decomposition, &config.decomposition_out)?;

        let new_codes = self.aliases.convert_code_table_lines(&codes);
        save_lines(&new_codes, &config.code_table_out)?;

        info!(
            decomposition = %config.decomposition_out.display(),
            code_table = %config.code_table_out.display(),
            "wrote alias-normalized dictionaries"
        );
        Ok(ConversionSummary {
            decomposition_lines: new_decomposition.len(),
            code_table_lines: new_codes.len(),
        })
    }
}

/// Runs the alias conversion described by `config`.
pub fn convert_aliases(config: &AliasConversionConfig) -> Result<ConversionSummary> {
    AliasConverter::from_file(&config.alias_table)?.convert(config)
}

/// Builds and writes the per-character decomposition table.
pub fn build_chaifen(config: &ChaifenConfig) -> Result<usize> {
    let mut table = ChaifenTable::new();
    table.load_decompositions(&read_text(&config.decomposition)?);
    table.load_full_codes(&read_text(&config.full_code)?);
    let records = table.records();
    save_json(&records, &config.output)?;
    info!(path = %config.output.display(), records = records.len(), "wrote chaifen table");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_joins_codes_and_usage() {
        let engine = ZigenEngine::from_sources(
            "a\t人\nbc\t入\n",
            "众\t人 人 入\n",
            RootColumn::Whole,
            OrderPolicy::FrequencyRanked,
        );
        let records = engine.records();
        assert_eq!("人", records[0].name);
        assert_eq!("入", records[1].name);
        assert_eq!(Some("c".to_string()), records[1].secondary);
    }

    #[test]
    fn empty_sources_give_no_records() {
        let engine = ZigenEngine::from_sources("", "", RootColumn::Whole, OrderPolicy::SourceOrder);
        assert!(engine.records().is_empty());
    }
}
