// File: src/persistence.rs
use crate::error::{Result, ZigenError};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a whole UTF-8 dictionary file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ZigenError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a table as an indented JSON array with non-ASCII text kept verbatim.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;
    write_atomically(path, &bytes)
}

/// Writes one line per entry, each terminated by a newline.
pub fn save_lines(lines: &[String], path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    for line in lines {
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
    }
    write_atomically(path, &bytes)
}

/// Nothing is visible at `path` until every byte has been written.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| ZigenError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(bytes).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }

    temp_file.persist(path).map_err(|source| ZigenError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RootRecord;

    #[test]
    fn json_is_indented_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("zigen.json");
        let records = vec![RootRecord {
            name: "人".to_string(),
            rel: "众从".to_string(),
            key: 'a',
            secondary: Some("b".to_string()),
        }];
        save_json(&records, &path).unwrap();

        let written = read_text(&path).unwrap();
        assert_eq!(
            "[\n    {\n        \"name\": \"人\",\n        \"rel\": \"众从\",\n        \"key\": \"a\",\n        \"secondary\": \"b\"\n    }\n]",
            written
        );
    }

    #[test]
    fn lines_end_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        save_lines(&["a\tb".to_string(), String::new()], &path).unwrap();
        assert_eq!("a\tb\n\n", read_text(&path).unwrap());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ZigenError::Read { .. }));
    }
}
