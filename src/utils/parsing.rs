//! Parsing utilities for CLI arguments and stored color values.

use crate::config::ColorScheme;
use crate::error::{Result, StoreError};

// =============================================================================
// Color Parsing
// =============================================================================

/// Parse a hex color string into RGB components.
///
/// Accepts formats: `#RRGGBB` or `RRGGBB`
///
/// # Example
/// ```
/// use upsc_prep_store::utils::parsing::parse_hex_color;
///
/// let (r, g, b) = parse_hex_color("#3B6F7D").unwrap();
/// assert_eq!((r, g, b), (59, 111, 125));
/// ```
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StoreError::InvalidInput(format!(
            "Invalid color hex: {}",
            hex
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| StoreError::InvalidInput(format!("Invalid color hex: {}", hex)))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Scheme Parsing
// =============================================================================

/// Parse a user-supplied color scheme name (case-insensitive).
///
/// # Example
/// ```
/// use upsc_prep_store::config::ColorScheme;
/// use upsc_prep_store::utils::parsing::parse_color_scheme;
///
/// assert_eq!(parse_color_scheme("Dark").unwrap(), ColorScheme::Dark);
/// ```
pub fn parse_color_scheme(name: &str) -> Result<ColorScheme> {
    ColorScheme::from_stored(&name.trim().to_lowercase()).ok_or_else(|| {
        StoreError::InvalidInput(format!("Unknown color scheme '{}'. Use: dark or light", name))
    })
}

// =============================================================================
// Toggle Parsing
// =============================================================================

/// Parse an on/off style switch value.
pub fn parse_toggle(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(StoreError::InvalidInput(format!(
            "Unknown switch value '{}'. Use: on or off",
            value
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================
