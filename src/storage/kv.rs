//! The key-value contract shared by all backends.

use crate::error::Result;

/// A durable string-to-string map.
///
/// Implementations must make each `set` and `remove` atomic per key: a reader
/// sees either the previous value or the new one, never a torn write.
pub trait KeyValueStore: Send + Sync {
    /// Read a key. `Ok(None)` means the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a key with `value`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
