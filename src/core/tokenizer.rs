// File: src/core/tokenizer.rs
use crate::core::types::{DecompositionEntry, RootToken};
use tracing::{info, trace};

/// A raw decomposition line, classified by the syntax it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompositionLine<'a> {
    /// `<char>\t<root> <root> ...`
    TabSpace { character: &'a str, roots: &'a str },
    /// `<char>\t<glyphs and {aliases}>`
    TabBrace { character: &'a str, sequence: &'a str },
    /// `... [<roots>,...] ...`, the format of older dictionaries.
    LegacyBracket { character: &'a str, segment: &'a str },
    /// No recognizable root list; the character contributes no roots.
    Malformed { character: &'a str },
}

/// A token produced by the brace scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedToken<'a> {
    pub text: &'a str,
    /// The token was written as `{text}`.
    pub braced: bool,
}

impl<'a> DecompositionLine<'a> {
    /// Classifies one line. Returns `None` for blank lines.
    pub fn classify(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some((character, rhs)) = line.split_once('\t') {
            let rhs = rhs.trim();
            return Some(if rhs.contains(' ') {
                DecompositionLine::TabSpace { character, roots: rhs }
            } else {
                DecompositionLine::TabBrace { character, sequence: rhs }
            });
        }

        let character = line.split_whitespace().next().unwrap_or(line);
        if line.contains('[') && line.contains(']') {
            if let Some(segment) = legacy_segment(line) {
                return Some(DecompositionLine::LegacyBracket { character, segment });
            }
        }
        Some(DecompositionLine::Malformed { character })
    }

    pub fn character(&self) -> &'a str {
        match self {
            DecompositionLine::TabSpace { character, .. }
            | DecompositionLine::TabBrace { character, .. }
            | DecompositionLine::LegacyBracket { character, .. }
            | DecompositionLine::Malformed { character } => character,
        }
    }

    /// The roots of this line in left-to-right order.
    pub fn tokens(&self) -> Vec<RootToken> {
        match self {
            DecompositionLine::TabSpace { roots, .. } => roots
                .split_whitespace()
                .map(|field| unbrace(field).to_string())
                .collect(),
            DecompositionLine::TabBrace { sequence, .. } => scan_braces(sequence)
                .into_iter()
                .map(|token| token.text.to_string())
                .collect(),
            DecompositionLine::LegacyBracket { segment, .. } => {
                let words: Vec<RootToken> = segment.split_whitespace().map(str::to_string).collect();
                if words.is_empty() {
                    segment.chars().map(String::from).collect()
                } else {
                    words
                }
            }
            DecompositionLine::Malformed { .. } => Vec::new(),
        }
    }

    pub fn into_entry(self) -> DecompositionEntry {
        DecompositionEntry {
            character: self.character().to_string(),
            roots: self.tokens(),
        }
    }
}

/// The text before the first comma inside the first `[...]`.
///
/// Only the first comma-separated alternative is used; older dictionaries
/// list secondary decompositions after it.
fn legacy_segment(line: &str) -> Option<&str> {
    let (_, after) = line.split_once('[')?;
    let inside = after.split_once(']').map_or(after, |(inside, _)| inside);
    let segment = inside.split(',').next().unwrap_or(inside);
    Some(segment.trim())
}

/// Strips one pair of braces from a field written wholly as `{...}`.
pub fn unbrace(field: &str) -> &str {
    field
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(field)
}

/// Splits a sequence into single glyphs and `{...}` aliases.
///
/// An opening brace without a matching close is kept as a literal one-glyph token.
pub fn scan_braces(sequence: &str) -> Vec<ScannedToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = sequence;
    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();
        if c == '{' {
            if let Some(close) = rest[width..].find('}') {
                tokens.push(ScannedToken {
                    text: &rest[width..width + close],
                    braced: true,
                });
                rest = &rest[width + close + 1..];
                continue;
            }
        }
        tokens.push(ScannedToken {
            text: &rest[..width],
            braced: false,
        });
        rest = &rest[width..];
    }
    tokens
}

/// Parses a whole decomposition file into entries, in file order.
pub fn parse_corpus(text: &str) -> Vec<DecompositionEntry> {
    let mut entries = Vec::new();
    let mut without_roots = 0usize;
    for line in text.lines() {
        let Some(classified) = DecompositionLine::classify(line) else {
            continue;
        };
        if let DecompositionLine::Malformed { character } = classified {
            trace!(character, "no root list found");
            without_roots += 1;
        }
        entries.push(classified.into_entry());
    }
    info!(characters = entries.len(), without_roots, "read decomposition corpus");
    entries
}
