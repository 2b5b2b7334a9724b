// File: src/config.rs
//! Input and output locations for each supported dictionary variant.

use crate::core::types::{OrderPolicy, RootColumn};
use std::path::PathBuf;

/// The dictionary variants this tool knows how to turn into root tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    /// Bracket-style decompositions, ranked by root frequency.
    Hao,
    /// Tab-separated decompositions, roots kept in code-table order.
    Ll,
    /// Alias-normalized files; each code line may define several roots.
    Liuli,
}

/// Everything needed to build one root table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub code_table: PathBuf,
    pub decomposition: PathBuf,
    pub output: PathBuf,
    /// When set, both dictionaries are alias-normalized in memory before parsing.
    pub alias_table: Option<PathBuf>,
    pub root_column: RootColumn,
    pub order: OrderPolicy,
}

impl Profile {
    pub fn config(self) -> ProfileConfig {
        match self {
            Profile::Hao => ProfileConfig {
                code_table: PathBuf::from("src/public/hao/hao_map.txt"),
                decomposition: PathBuf::from("src/public/hao/hao_div.txt"),
                output: PathBuf::from("src/public/hao/zigen-xi.json"),
                alias_table: None,
                root_column: RootColumn::Whole,
                order: OrderPolicy::FrequencyRanked,
            },
            Profile::Ll => ProfileConfig {
                code_table: PathBuf::from("src/public/ll/ll_map.txt"),
                decomposition: PathBuf::from("src/public/ll/ll_div.txt"),
                output: PathBuf::from("src/public/ll/zigen.json"),
                alias_table: None,
                root_column: RootColumn::Whole,
                order: OrderPolicy::SourceOrder,
            },
            Profile::Liuli => ProfileConfig {
                code_table: PathBuf::from("src/public/liuli/ll_map.real.txt"),
                decomposition: PathBuf::from("src/public/liuli/ll_div.real.txt"),
                output: PathBuf::from("src/public/liuli/zigen1.json"),
                alias_table: None,
                root_column: RootColumn::Split,
                order: OrderPolicy::SourceOrder,
            },
        }
    }
}

/// Files read and written when normalizing aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConversionConfig {
    pub alias_table: PathBuf,
    pub code_table: PathBuf,
    pub decomposition: PathBuf,
    pub code_table_out: PathBuf,
    pub decomposition_out: PathBuf,
}

impl AliasConversionConfig {
    /// The standard file names inside one dictionary directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            alias_table: dir.join("PUAtoalias.txt"),
            code_table: dir.join("ll_map.txt"),
            decomposition: dir.join("ll_div.txt"),
            code_table_out: dir.join("ll_map.real.txt"),
            decomposition_out: dir.join("ll_div.real.txt"),
        }
    }
}

impl Default for AliasConversionConfig {
    fn default() -> Self {
        Self::in_dir("src/public/ll")
    }
}

/// Files read and written when building the per-character table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaifenConfig {
    pub decomposition: PathBuf,
    pub full_code: PathBuf,
    pub output: PathBuf,
}

impl ChaifenConfig {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            decomposition: dir.join("ll_div.real.txt"),
            full_code: dir.join("ll_fullcode.txt"),
            output: dir.join("chaifen.json"),
        }
    }
}

impl Default for ChaifenConfig {
    fn default() -> Self {
        Self::in_dir("src/public/ll")
    }
}
