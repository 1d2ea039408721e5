//! Directory-backed store, one file per key.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::{classify_io_error, KeyValueStore};
use crate::config::FileStoreConfig;
use crate::error::StoreError;

/// File-backed key-value store.
///
/// Each key maps onto a sanitized file name under the root directory.
/// Writes go to a temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    root_dir: PathBuf,
    extension: String,
}

impl FileStore {
    /// Creates a store rooted at the configured directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(config: &FileStoreConfig) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            extension: config.extension.clone(),
        }
    }

    /// Returns the root directory.
    pub fn root_dir(&self) -> &PathBuf {
        &self.root_dir
    }

    /// Returns the file path holding a key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        Ok(self
            .root_dir
            .join(format!("{}.{}", encode_key(key)?, self.extension)))
    }
}

/// Maps a key onto a file name.
///
/// ASCII alphanumerics, `-` and `_` pass through; every other byte is
/// written as `%XX`.
fn encode_key(key: &str) -> Result<String, StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    Ok(encoded)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 content surfaces as raw garbage for the validator to reject
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                let bytes = fs::read(&path).map_err(|e| classify_io_error(e, "read"))?;
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) => Err(classify_io_error(e, "read")),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let final_path = self.path_for(key)?;
        let temp_path = final_path.with_extension(format!("{}.tmp", self.extension));

        // Ensure root directory exists
        fs::create_dir_all(&self.root_dir)
            .map_err(|e| classify_io_error(e, "create store directory"))?;

        let mut file =
            File::create(&temp_path).map_err(|e| classify_io_error(e, "create temp file"))?;
        file.write_all(value.as_bytes())
            .map_err(|e| classify_io_error(e, "write record"))?;
        file.sync_all()
            .map_err(|e| classify_io_error(e, "sync record"))?;

        // Atomic rename
        fs::rename(&temp_path, &final_path).map_err(|e| classify_io_error(e, "rename record"))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(classify_io_error(e, "remove record")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> FileStore {
        FileStore::new(&FileStoreConfig {
            root_dir: dir.join("settings"),
            ..Default::default()
        })
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("users-table_v2").unwrap(), "users-table_v2");
        assert_eq!(encode_key("a/b c").unwrap(), "a%2Fb%20c");
        assert_eq!(encode_key("..").unwrap(), "%2E%2E");
        assert!(matches!(encode_key(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_roundtrip_and_remove() {
        let temp_dir = tempdir().unwrap();
        let store = store_in(temp_dir.path());

        assert_eq!(store.get("orders").unwrap(), None);

        store.set("orders", "{\"a\":1}").unwrap();
        assert_eq!(store.get("orders").unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(store.path_for("orders").unwrap().exists());

        store.remove("orders").unwrap();
        assert_eq!(store.get("orders").unwrap(), None);
        // Removing twice is fine
        store.remove("orders").unwrap();
    }

    #[test]
    fn test_non_utf8_content_is_returned_lossily() {
        let temp_dir = tempdir().unwrap();
        let store = store_in(temp_dir.path());
        store.set("k", "x").unwrap();
        fs::write(store.path_for("k").unwrap(), [0xff, 0xfe, b'{']).unwrap();

        let value = store.get("k").unwrap().unwrap();
        assert!(value.ends_with('{'));
    }
}
