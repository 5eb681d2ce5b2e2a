// File: src/persistence.rs
use crate::core::types::{LexiconEntry, RootEntry};
use crate::error::{Result, TableError};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The two source tables an engine is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableSnapshot {
    pub lexicon: Vec<LexiconEntry>,
    pub roots: Vec<RootEntry>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Reads a JSON array of `{ "word", "meaning" }` rows.
pub fn load_lexicon_json(path: &Path) -> Result<Vec<LexiconEntry>> {
    let lexicon: Vec<LexiconEntry> = read_json(path)?;
    log::info!("loaded {} lexicon rows from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Reads a JSON array of `{ "letter", "name", "numericValue", "meaning", "symbol" }` rows.
pub fn load_roots_json(path: &Path) -> Result<Vec<RootEntry>> {
    let roots: Vec<RootEntry> = read_json(path)?;
    log::info!("loaded {} root rows from {}", roots.len(), path.display());
    Ok(roots)
}

/// Writes the snapshot as bincode through a temp file in the target
/// directory, then renames it into place.
pub fn save_to_disk(snapshot: &TableSnapshot, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| TableError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| TableError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush().map_err(|e| TableError::io(temp_file.path(), e))?;
    }

    temp_file.persist(path)?;
    log::info!("saved table snapshot to {}", path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<TableSnapshot> {
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableSnapshot {
        TableSnapshot {
            lexicon: vec![LexiconEntry::new("in", "with")],
            roots: vec![RootEntry::new('i', "Gon", 10, "faith", "ι")],
        }
    }

    #[test]
    fn snapshot_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tables.bin");
        save_to_disk(&sample(), &path).unwrap();
        assert_eq!(load_from_disk(&path).unwrap(), sample());
    }

    #[test]
    fn json_rows_tolerate_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roots.json");
        fs::write(&path, r#"[{"letter": "A", "name": "Un", "numericValue": 6}, {"name": "Pal"}]"#)
            .unwrap();
        let roots = load_roots_json(&path).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].numeric_value, 6);
        assert!(roots[1].letter.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_lexicon_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn bad_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_lexicon_json(&path), Err(TableError::Json(_))));
    }
}
