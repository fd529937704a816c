//! Presentation data: palettes, animation presets and the dog's personality.

mod catalog;
pub mod persona;
mod presets;
mod theme;

pub use catalog::Catalog;
pub use persona::{Mood, SnarkLevel};
pub use presets::{DEFAULT_PRESET, Preset, PresetKind};
pub use theme::{DEFAULT_THEME, Theme};
