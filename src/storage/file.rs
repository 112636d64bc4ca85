//! File-backed key-value store.
//!
//! One file per key inside a data directory. Writes go to a uniquely named
//! temporary file, are synced to disk, then renamed into place, so a crash
//! mid-write leaves the previous value intact.

use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::storage::kv::KeyValueStore;

const VALUE_EXT: &str = "val";

/// Makes temp file names unique per write within this process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Directory of `<encoded-key>.val` files.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", encode_key(key), VALUE_EXT))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Read '{}' from {}", key, path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.root).map_err(write_err)?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!(
            ".{}.{}.{}-{}.tmp",
            encode_key(key),
            VALUE_EXT,
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let written = write_synced(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(write_err(e));
        }

        log::debug!("Wrote '{}' to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                log::debug!("Removed '{}'", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Write `value` to `path` and flush it to disk before returning.
fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

/// Map a key to a file stem. ASCII alphanumerics, `_` and `-` pass through;
/// every other byte becomes `%XX`, so distinct keys never share a file.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}
