//! Single source of truth for dark/light mode.

use std::sync::Arc;

use crate::config::{ColorScheme, THEME_KEY};
use crate::observer::{Listeners, SubscriptionId};
use crate::storage::KeyValueStore;
use crate::theme::palette::{Palette, get_palette};

/// Sent to subscribers after every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub is_dark_mode: bool,
    pub palette: &'static Palette,
}

/// Persisted theme preference plus its subscribers.
pub struct ThemeStore {
    backend: Arc<dyn KeyValueStore>,
    is_dark_mode: bool,
    listeners: Listeners<ThemeChange>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("is_dark_mode", &self.is_dark_mode)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl ThemeStore {
    /// Read the stored preference, falling back to `host_scheme` when the key
    /// is absent, malformed or unreadable. Never fails.
    pub fn load(backend: Arc<dyn KeyValueStore>, host_scheme: ColorScheme) -> Self {
        let is_dark_mode = read_preference(backend.as_ref(), host_scheme).is_dark();
        log::debug!("Theme loaded (dark mode: {})", is_dark_mode);

        Self {
            backend,
            is_dark_mode,
            listeners: Listeners::default(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_mode(self.is_dark_mode)
    }

    pub fn palette(&self) -> &'static Palette {
        get_palette(self.is_dark_mode)
    }

    /// Flip the mode, persist it and notify subscribers.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory mode
    /// still changes.
    pub fn toggle(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        let scheme = self.scheme();

        if let Err(e) = self.backend.set(THEME_KEY, scheme.as_str()) {
            log::error!("Failed to save theme preference: {}", e);
        }

        self.listeners.notify(&ThemeChange {
            is_dark_mode: self.is_dark_mode,
            palette: self.palette(),
        });
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

fn read_preference(backend: &dyn KeyValueStore, host_scheme: ColorScheme) -> ColorScheme {
    match backend.get(THEME_KEY) {
        Ok(Some(value)) => ColorScheme::from_stored(&value).unwrap_or_else(|| {
            log::warn!(
                "Ignoring malformed theme preference '{}', using host scheme ({})",
                value,
                host_scheme
            );
            host_scheme
        }),
        Ok(None) => host_scheme,
        Err(e) => {
            log::warn!("Failed to load theme: {}", e);
            host_scheme
        }
    }
}
