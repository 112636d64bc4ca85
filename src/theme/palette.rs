//! Light and dark palettes: named color roles for every screen.
//!
//! Palettes are static. The active one is always derived from the dark-mode
//! flag and never persisted.

use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::utils::parsing::parse_hex_color;

/// One full palette for an appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    // --- Brand
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub accent: &'static str,
    pub accent_light: &'static str,

    // --- Surfaces
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,

    // --- Text
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub text_light: &'static str,

    // --- Borders
    pub border: &'static str,
    pub border_light: &'static str,

    // --- Semantic
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,

    // --- Tab bar
    pub tab_active: &'static str,
    pub tab_inactive: &'static str,

    /// CSS `rgba(...)`, not hex.
    pub card_shadow: &'static str,
}

pub static LIGHT: Palette = Palette {
    primary: "#3B6F7D",
    primary_light: "#5A8E9C",
    primary_dark: "#2D5561",
    accent: "#0D2B44",
    accent_light: "#1A3A5A",

    background: "#FFFFFF",
    surface: "#F9FAFB",
    surface_alt: "#F3F4F6",

    text: "#0D2B44",
    text_secondary: "#4B5563",
    text_tertiary: "#9CA3AF",
    text_light: "#FFFFFF",

    border: "#E5E7EB",
    border_light: "#F3F4F6",

    success: "#22C55E",
    warning: "#FBBF24",
    error: "#EF4444",

    tab_active: "#3B6F7D",
    tab_inactive: "#6B7280",

    card_shadow: "rgba(13, 43, 68, 0.1)",
};

pub static DARK: Palette = Palette {
    primary: "#5A8E9C",
    primary_light: "#7BAFBD",
    primary_dark: "#3B6F7D",
    accent: "#1E293B",
    accent_light: "#334155",

    background: "#0F172A",
    surface: "#1E293B",
    surface_alt: "#334155",

    text: "#F8FAFC",
    text_secondary: "#94A3B8",
    text_tertiary: "#64748B",
    text_light: "#FFFFFF",

    border: "#334155",
    border_light: "#1E293B",

    success: "#4ADE80",
    warning: "#FBBF24",
    error: "#F87171",

    tab_active: "#FFFFFF",
    tab_inactive: "#64748B",

    card_shadow: "rgba(0, 0, 0, 0.3)",
};

/// Palette for a dark-mode flag. Pure and total.
///
/// # Arguments
/// * `is_dark_mode` - `true` for the dark palette
///
/// # Returns
/// A reference to one of the two static palettes.
///
/// # Example
///
/// ```
/// use upsc_prep_store::get_palette;
///
/// assert_eq!(get_palette(true).background, "#0F172A");
/// assert_eq!(get_palette(false).background, "#FFFFFF");
/// ```
pub fn get_palette(is_dark_mode: bool) -> &'static Palette {
    if is_dark_mode { &DARK } else { &LIGHT }
}

impl Palette {
    /// All roles in display order, as `(camelCase name, value)`.
    pub fn roles(&self) -> [(&'static str, &'static str); 20] {
        [
            ("primary", self.primary),
            ("primaryLight", self.primary_light),
            ("primaryDark", self.primary_dark),
            ("accent", self.accent),
            ("accentLight", self.accent_light),
            ("background", self.background),
            ("surface", self.surface),
            ("surfaceAlt", self.surface_alt),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("textTertiary", self.text_tertiary),
            ("textLight", self.text_light),
            ("border", self.border),
            ("borderLight", self.border_light),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("tabActive", self.tab_active),
            ("tabInactive", self.tab_inactive),
            ("cardShadow", self.card_shadow),
        ]
    }

    /// Look up a role by its camelCase name.
    pub fn role(&self, name: &str) -> Option<&'static str> {
        self.roles()
            .into_iter()
            .find(|(role, _)| *role == name)
            .map(|(_, value)| value)
    }

    /// RGB components of a hex role. Fails for unknown roles and for
    /// non-hex values such as `cardShadow`.
    pub fn rgb(&self, name: &str) -> Result<(u8, u8, u8)> {
        let value = self.role(name).ok_or_else(|| {
            StoreError::InvalidInput(format!("Unknown palette role '{}'", name))
        })?;
        parse_hex_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_palette_is_deterministic() {
        for dark in [false, true] {
            assert_eq!(get_palette(dark), get_palette(dark));
            assert!(std::ptr::eq(get_palette(dark), get_palette(dark)));
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_eq!(get_palette(false).background, "#FFFFFF");
        assert_eq!(get_palette(true).background, "#0F172A");
        assert_ne!(get_palette(false), get_palette(true));
    }

    #[test]
    fn test_all_hex_roles_parse() {
        for palette in [&LIGHT, &DARK] {
            for (name, _) in palette.roles() {
                if name == "cardShadow" {
                    assert!(palette.rgb(name).is_err());
                } else {
                    assert!(palette.rgb(name).is_ok(), "role {name} should be hex");
                }
            }
        }
    }

    #[test]
    fn test_role_lookup() {
        assert_eq!(DARK.role("tabActive"), Some("#FFFFFF"));
        assert_eq!(DARK.role("missing"), None);
        assert_eq!(LIGHT.rgb("primary").unwrap(), (0x3B, 0x6F, 0x7D));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(get_palette(true)).unwrap();
        assert_eq!(json["textSecondary"], "#94A3B8");
        assert_eq!(json.as_object().unwrap().len(), 20);
    }
}
