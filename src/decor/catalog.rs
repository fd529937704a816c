use super::presets::{self, DEFAULT_PRESET, Preset, PresetKind};
use super::theme::{self, DEFAULT_THEME, Theme};

/// Every theme and animation preset, built once at startup and read-only after
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: Vec<Theme>,
    presets: Vec<Preset>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            themes: theme::builtin(),
            presets: presets::builtin(),
        }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Index of the theme called `name`, or of the default theme
    pub fn theme_index(&self, name: &str) -> usize {
        position(&self.themes, |t| t.name == name)
            .or_else(|| position(&self.themes, |t| t.name == DEFAULT_THEME))
            .unwrap_or(0)
    }

    /// Index of the preset called `name`, or of the default preset
    pub fn preset_index(&self, name: &str) -> usize {
        position(&self.presets, |p| p.name == name)
            .or_else(|| position(&self.presets, |p| p.name == DEFAULT_PRESET))
            .unwrap_or(0)
    }

    pub fn theme(&self, index: usize) -> &Theme {
        &self.themes[index % self.themes.len()]
    }

    pub fn preset(&self, index: usize) -> &Preset {
        &self.presets[index % self.presets.len()]
    }

    pub fn next_theme(&self, index: usize) -> usize {
        (index + 1) % self.themes.len()
    }

    /// Next loader preset after `index`, wrapping. Idle and event presets
    /// are only reachable by name.
    pub fn next_preset(&self, index: usize) -> usize {
        let len = self.presets.len();
        (1..=len)
            .map(|step| (index + step) % len)
            .find(|&i| self.presets[i].kind == PresetKind::Loader)
            .unwrap_or(index)
    }
}

fn position<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(pred)
}
