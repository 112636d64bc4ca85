//! Both stores wired to one backend.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::profile::ProfileStore;
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::ThemeStore;

pub struct Stores {
    pub theme: ThemeStore,
    pub profile: ProfileStore,
    backend: Arc<dyn KeyValueStore>,
}

impl Stores {
    /// Open file-backed stores under `config.data_dir`.
    pub fn open(config: &StoreConfig) -> Self {
        log::debug!("Opening stores in {}", config.data_dir.display());
        Self::with_backend(Arc::new(FileStore::from_config(config)), config)
    }

    pub fn with_backend(backend: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        Self {
            theme: ThemeStore::load(Arc::clone(&backend), config.host_scheme),
            profile: ProfileStore::new(Arc::clone(&backend)),
            backend,
        }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("theme", &self.theme)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
