//! Profile record, avatar reference and incognito flag.
//!
//! The three pieces are loaded together but live under separate keys. Only
//! `save_profile` reports failures to the caller; every load degrades to
//! defaults and the remaining writes are logged and forgotten.

use std::sync::Arc;

use crate::config::{AVATAR_KEY, INCOGNITO_KEY, PROFILE_KEY};
use crate::error::{Result, StoreError};
use crate::observer::{Listeners, SubscriptionId};
use crate::profile::types::{ProfileEvent, UserProfile};
use crate::storage::KeyValueStore;

pub struct ProfileStore {
    backend: Arc<dyn KeyValueStore>,
    listeners: Listeners<ProfileEvent>,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl ProfileStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            listeners: Listeners::default(),
        }
    }

    // =========================================================================
    // Profile record
    // =========================================================================

    /// Latest persisted profile, or the placeholder record on first run.
    pub fn load_profile(&self) -> UserProfile {
        match self.backend.get(PROFILE_KEY) {
            Ok(Some(raw)) => UserProfile::from_json_lenient(&raw).unwrap_or_else(|| {
                log::warn!("Stored profile is not a JSON object, using defaults");
                UserProfile::default()
            }),
            Ok(None) => UserProfile::default(),
            Err(e) => {
                log::warn!("Failed to load profile data: {}", e);
                UserProfile::default()
            }
        }
    }

    /// Overwrite the whole stored record. No field validation happens here.
    pub fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        let content = serde_json::to_string(profile).map_err(|source| StoreError::Encode {
            key: PROFILE_KEY.to_string(),
            source,
        })?;

        if let Err(e) = self.backend.set(PROFILE_KEY, &content) {
            log::error!("Failed to save profile: {}", e);
            return Err(e);
        }

        log::info!("Profile saved");
        self.listeners
            .notify(&ProfileEvent::ProfileSaved(profile.clone()));
        Ok(())
    }

    // =========================================================================
    // Avatar
    // =========================================================================

    pub fn load_avatar(&self) -> Option<String> {
        self.backend.get(AVATAR_KEY).unwrap_or_else(|e| {
            log::warn!("Failed to load avatar: {}", e);
            None
        })
    }

    pub fn set_avatar(&mut self, uri: &str) {
        match self.backend.set(AVATAR_KEY, uri) {
            Ok(()) => self
                .listeners
                .notify(&ProfileEvent::AvatarChanged(Some(uri.to_string()))),
            Err(e) => log::error!("Failed to save avatar: {}", e),
        }
    }

    /// Remove the avatar key entirely. Not the same as `set_avatar("")`.
    pub fn clear_avatar(&mut self) {
        match self.backend.remove(AVATAR_KEY) {
            Ok(()) => self.listeners.notify(&ProfileEvent::AvatarChanged(None)),
            Err(e) => log::error!("Failed to remove avatar: {}", e),
        }
    }

    // =========================================================================
    // Incognito
    // =========================================================================

    pub fn load_incognito(&self) -> bool {
        match self.backend.get(INCOGNITO_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed incognito flag '{}': {}", raw, e);
                false
            }),
            Ok(None) => false,
            Err(e) => {
                log::warn!("Failed to load incognito flag: {}", e);
                false
            }
        }
    }

    pub fn set_incognito(&mut self, value: bool) {
        let encoded = if value { "true" } else { "false" };
        match self.backend.set(INCOGNITO_KEY, encoded) {
            Ok(()) => self
                .listeners
                .notify(&ProfileEvent::IncognitoChanged(value)),
            Err(e) => log::error!("Failed to save incognito flag: {}", e),
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ProfileEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
