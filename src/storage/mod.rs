//! Key-value persistence backends.
//!
//! Every piece of app state lives under its own string key. Each key write is
//! atomic on its own; there is no cross-key transaction.

pub mod file;
pub mod kv;
pub mod memory;

// Re-export commonly used items
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
