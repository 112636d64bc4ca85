//! Dark/light mode preference and the palettes derived from it.

pub mod palette;
pub mod store;

pub use palette::{DARK, LIGHT, Palette, get_palette};
pub use store::{ThemeChange, ThemeStore};
