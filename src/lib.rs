//! UPSC Prep Store Library
//!
//! Locally persisted state for the UPSC preparation app: the dark/light
//! preference with its derived palette, the user profile, the avatar
//! reference and the incognito flag.
//!
//! # Features
//!
//! - Theme preference with host fallback and change notifications
//! - Whole-record profile persistence with lenient decoding
//! - Independent avatar and incognito keys
//! - Backup export and advisory profile validation
//!
//! # Example
//!
//! ```no_run
//! use upsc_prep_store::{ColorScheme, StoreConfig, Stores};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::resolve(None, Some(ColorScheme::Light))?;
//!     let mut stores = Stores::open(&config);
//!
//!     stores.theme.subscribe(|change| {
//!         println!("Background is now {}", change.palette.background);
//!     });
//!     stores.theme.toggle();
//!
//!     let mut profile = stores.profile.load_profile();
//!     profile.target_year = "2027".into();
//!     stores.profile.save_profile(&profile)?;
//!
//!     Ok(())
//! }
//! ```

pub mod backup;
pub mod config;
pub mod error;
pub mod observer;
pub mod profile;
pub mod storage;
pub mod stores;
pub mod theme;
pub mod utils;

// Re-exports for convenience
pub use config::{ColorScheme, StoreConfig};
pub use error::{Result, StoreError};
pub use profile::{ProfileEvent, ProfileStore, UserProfile};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use stores::Stores;
pub use theme::{Palette, ThemeStore, get_palette};
