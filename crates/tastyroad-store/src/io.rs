//! JSON file I/O and atomic file operations

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON document, returning `None` when the file does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| StoreError::json(path, e))
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_read_json_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result: Option<BTreeMap<String, u32>> =
            read_json(&temp.path().join("missing.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_json_malformed_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<Option<BTreeMap<String, u32>>, _> = read_json(&path);
        assert!(matches!(result, Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("store.json");

        atomic_write(&path, b"{\"a\":1}").unwrap();

        let read: Option<BTreeMap<String, u32>> = read_json(&path).unwrap();
        assert_eq!(read.unwrap().get("a"), Some(&1));
        assert!(!path.with_extension("tmp").exists());
    }
}
