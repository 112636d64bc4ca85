//! Store configuration: storage keys, color schemes and data directory
//! resolution.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

// =============================================================================
// Storage Keys
// =============================================================================

/// Key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "@user_theme_preference";

/// Key holding the JSON-encoded profile record.
pub const PROFILE_KEY: &str = "user_profile";

/// Key holding the avatar URI.
pub const AVATAR_KEY: &str = "user_avatar";

/// Key holding the JSON-encoded incognito boolean.
pub const INCOGNITO_KEY: &str = "incognito_mode";

// =============================================================================
// Color Scheme
// =============================================================================

/// Light or dark appearance, as stored and as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Decode a stored value. Anything other than the two exact strings is
    /// rejected so callers can fall back to the host preference.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

const APP_DIR_NAME: &str = "upsc-prep";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "UPSC_PREP_DATA_DIR";

/// Environment variable standing in for the host color scheme.
pub const SYSTEM_THEME_ENV: &str = "UPSC_PREP_SYSTEM_THEME";

/// Where state lives and what the host prefers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub host_scheme: ColorScheme,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>, host_scheme: ColorScheme) -> Self {
        Self {
            data_dir: data_dir.into(),
            host_scheme,
        }
    }

    /// Resolve configuration from explicit overrides, then the environment,
    /// then platform defaults.
    ///
    /// - Linux: ~/.local/share/upsc-prep/
    /// - Windows: %APPDATA%\upsc-prep\
    pub fn resolve(data_dir: Option<PathBuf>, host_scheme: Option<ColorScheme>) -> Result<Self> {
        let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        let env_scheme = std::env::var(SYSTEM_THEME_ENV).ok();
        Self::resolve_with(data_dir, host_scheme, env_dir, env_scheme.as_deref())
    }

    fn resolve_with(
        data_dir: Option<PathBuf>,
        host_scheme: Option<ColorScheme>,
        env_dir: Option<PathBuf>,
        env_scheme: Option<&str>,
    ) -> Result<Self> {
        let data_dir = match data_dir.or(env_dir) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let host_scheme = host_scheme
            .or_else(|| {
                env_scheme.and_then(|s| {
                    let parsed = ColorScheme::from_stored(&s.trim().to_lowercase());
                    if parsed.is_none() {
                        log::warn!("Ignoring {}='{}' (expected dark or light)", SYSTEM_THEME_ENV, s);
                    }
                    parsed
                })
            })
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            host_scheme,
        })
    }
}

/// Platform data directory for the app.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_DIR_NAME))
        .ok_or(StoreError::DataDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_stored_values() {
        assert_eq!(ColorScheme::from_stored("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::from_stored("light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::from_stored("Dark"), None);
        assert_eq!(ColorScheme::from_stored("\"dark\""), None);
        assert_eq!(ColorScheme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_explicit_overrides_win() {
        let config = StoreConfig::resolve_with(
            Some(PathBuf::from("/tmp/explicit")),
            Some(ColorScheme::Dark),
            Some(PathBuf::from("/tmp/env")),
            Some("light"),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/explicit"));
        assert_eq!(config.host_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_env_used_when_no_override() {
        let config =
            StoreConfig::resolve_with(None, None, Some(PathBuf::from("/tmp/env")), Some(" DARK "))
                .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/env"));
        assert_eq!(config.host_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_bad_env_scheme_falls_back_to_light() {
        let config =
            StoreConfig::resolve_with(Some(PathBuf::from("/tmp/x")), None, None, Some("sepia"))
                .unwrap();
        assert_eq!(config.host_scheme, ColorScheme::Light);
    }
}
