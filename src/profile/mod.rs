//! User profile, avatar reference and incognito flag.

pub mod store;
pub mod types;
pub mod validation;

pub use store::ProfileStore;
pub use types::{ProfileEvent, UserProfile};
pub use validation::{ProfileWarning, validate_profile};
