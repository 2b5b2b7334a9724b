// File: src/core/alias.rs
use crate::core::tokenizer::{scan_braces, unbrace, ScannedToken};
use crate::core::types::RootToken;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Maps complex root aliases to the simple (usually private-use-area) glyph
/// that stands in for them.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    canonical: HashMap<String, RootToken>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `<canonical>\t<alias>` lines. The alias may be written as
    /// `{alias}`; it is stored without the braces. A later line for the same
    /// alias replaces the earlier one.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for line in text.lines() {
            let Some((canonical, alias)) = line.split_once('\t') else {
                continue;
            };
            map.insert(unbrace(alias.trim()), canonical.trim());
        }
        info!(aliases = map.len(), "read alias table");
        map
    }

    /// Adds a mapping. Empty aliases or targets are ignored.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        if alias.is_empty() || canonical.is_empty() {
            return;
        }
        self.canonical.insert(alias.to_string(), canonical.to_string());
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.canonical.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Rewrites one scanned token. Unmapped braced tokens get their braces back.
    fn normalize_token(&self, token: ScannedToken<'_>, out: &mut String) {
        match self.resolve(token.text) {
            Some(canonical) => out.push_str(canonical),
            None if token.braced => {
                out.push('{');
                out.push_str(token.text);
                out.push('}');
            }
            None => out.push_str(token.text),
        }
    }

    /// Normalizes the right-hand side of a decomposition line.
    pub fn normalize_decomposition(&self, rhs: &str) -> String {
        let mut out = String::with_capacity(rhs.len());
        for token in scan_braces(rhs) {
            self.normalize_token(token, &mut out);
        }
        out
    }

    /// Normalizes the space-separated root list of a code table line.
    ///
    /// Aliases that collapse onto the same canonical root are listed once, at
    /// the position of their first occurrence.
    pub fn normalize_code_roots(&self, rhs: &str) -> Vec<RootToken> {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();
        for alias in rhs.trim().split(' ').filter(|a| !a.is_empty()) {
            let root = self.resolve(unbrace(alias)).unwrap_or(alias);
            if seen.insert(root) {
                roots.push(root.to_string());
            }
        }
        roots
    }

    /// Converts every line of a decomposition file. Lines without a tab are kept verbatim.
    pub fn convert_decomposition_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| match line.split_once('\t') {
                Some((left, rhs)) => format!("{}\t{}", left, self.normalize_decomposition(rhs)),
                None => line.to_string(),
            })
            .collect()
    }

    /// Converts every line of a code table file. Lines without a tab are kept verbatim.
    pub fn convert_code_table_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| match line.split_once('\t') {
                Some((code, rhs)) => {
                    format!("{}\t{}", code, self.normalize_code_roots(rhs).join(" "))
                }
                None => line.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUA: &str = "\u{E001}";

    fn table() -> AliasMap {
        AliasMap::parse("木\t在字框\n\u{E001}\t龰足\nbad line\n\t空\n")
    }

    #[test]
    fn parse_skips_incomplete_lines() {
        let map = table();
        assert_eq!(2, map.len());
        assert_eq!(Some("木"), map.resolve("在字框"));
        assert_eq!(Some(PUA), map.resolve("龰足"));
        assert_eq!(None, map.resolve("空"));
    }

    #[test]
    fn braced_alias_column_is_stored_bare() {
        let map = AliasMap::parse("木\t{在字框}\n");
        assert_eq!(Some("木"), map.resolve("在字框"));
        assert_eq!(None, map.resolve("{在字框}"));

        let div = map.convert_decomposition_lines("框\t{在字框} 木");
        assert_eq!(vec!["框\t木 木"], div);
        assert_eq!(vec!["木"], map.normalize_code_roots("{在字框} 木"));
    }

    #[test]
    fn later_alias_definition_wins() {
        let map = AliasMap::parse("甲\tX\n乙\tX\n");
        assert_eq!(Some("乙"), map.resolve("X"));
    }

    #[test]
    fn braced_alias_is_replaced_without_braces() {
        assert_eq!("木木", table().normalize_decomposition("{在字框}木"));
    }

    #[test]
    fn unknown_braced_alias_keeps_braces() {
        assert_eq!("口{未知者}日", table().normalize_decomposition("口{未知者}日"));
    }

    #[test]
    fn unmatched_brace_survives() {
        assert_eq!("木{口", table().normalize_decomposition("木{口"));
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let map = table();
        let once = map.normalize_decomposition("{龰足}{在字框}{别的}口");
        assert_eq!(format!("{}木{{别的}}口", PUA), once);
        assert_eq!(once, map.normalize_decomposition(&once));
    }

    #[test]
    fn code_roots_are_canonicalized_and_deduplicated() {
        let roots = table().normalize_code_roots("在字框 木 口  龰足 口");
        assert_eq!(vec!["木", "口", PUA], roots);
    }

    #[test]
    fn converted_files_keep_lines_without_tabs() {
        let map = table();
        let div = map.convert_decomposition_lines("框\t{在字框}木\n\n# note");
        assert_eq!(vec!["框\t木木", "", "# note"], div);

        let codes = map.convert_code_table_lines("Ab\t在字框 木\nCd");
        assert_eq!(vec!["Ab\t木", "Cd"], codes);
    }
}
