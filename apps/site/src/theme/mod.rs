//! Theme state holder: the dark/light flag and the palette it selects.
//!
//! Initial mode: persisted choice, else platform preference, else light.
//! The mode changes only through `ThemeState::toggle`, which writes the new
//! value to the `PreferenceStore` passed in by the caller.

use serde::Serialize;

use crate::content::models::{PaletteSpec, ThemeSection};

pub mod cookie;

/// Key under which the dark-mode flag is persisted.
pub const STORAGE_KEY: &str = "darkMode";

/// A complete set of named colour roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub surface: String,
    pub border: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#F8FAFC".to_string(),
            text: "#0F172A".to_string(),
            primary: "#2563EB".to_string(),
            secondary: "#7C3AED".to_string(),
            accent: "#F59E0B".to_string(),
            surface: "#FFFFFF".to_string(),
            border: "#E2E8F0".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#0F172A".to_string(),
            text: "#F1F5F9".to_string(),
            primary: "#60A5FA".to_string(),
            secondary: "#A78BFA".to_string(),
            accent: "#FBBF24".to_string(),
            surface: "#1E293B".to_string(),
            border: "#334155".to_string(),
        }
    }

    /// Fills every role missing from `spec` with the matching role of `fallback`.
    pub fn from_spec(spec: &PaletteSpec, fallback: Palette) -> Self {
        let pick = |role: &Option<String>, default: String| {
            role.clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(default)
        };
        Self {
            background: pick(&spec.background, fallback.background),
            text: pick(&spec.text, fallback.text),
            primary: pick(&spec.primary, fallback.primary),
            secondary: pick(&spec.secondary, fallback.secondary),
            accent: pick(&spec.accent, fallback.accent),
            surface: pick(&spec.surface, fallback.surface),
            border: pick(&spec.border, fallback.border),
        }
    }

    /// Role name / colour pairs, in a stable order.
    pub fn roles(&self) -> [(&'static str, &str); 7] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("surface", self.surface.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

/// The light and dark palettes of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl ThemeColors {
    pub fn from_content(section: &ThemeSection) -> Self {
        Self {
            light: Palette::from_spec(&section.colors.light, Palette::light()),
            dark: Palette::from_spec(&section.colors.dark, Palette::dark()),
        }
    }
}

/// Where the dark-mode flag is persisted between visits.
pub trait PreferenceStore {
    /// The stored flag, or `None` when the visitor never chose.
    fn load(&self) -> Option<bool>;
    fn save(&mut self, is_dark_mode: bool);
}

/// In-memory store for exercising `ThemeState` without a request.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_value(value: bool) -> Self {
        Self { value: Some(value) }
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        self.value
    }

    fn save(&mut self, is_dark_mode: bool) {
        self.value = Some(is_dark_mode);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    is_dark_mode: bool,
}

impl ThemeState {
    pub fn initial(persisted: Option<bool>, platform: Option<bool>) -> Self {
        Self {
            is_dark_mode: persisted.or(platform).unwrap_or(false),
        }
    }

    pub fn resolve(store: &dyn PreferenceStore, platform: Option<bool>) -> Self {
        Self::initial(store.load(), platform)
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// `"dark"` or `"light"`.
    pub fn mode_name(&self) -> &'static str {
        if self.is_dark_mode {
            "dark"
        } else {
            "light"
        }
    }

    /// Flips the mode and persists it. Returns the new flag.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> bool {
        self.is_dark_mode = !self.is_dark_mode;
        store.save(self.is_dark_mode);
        self.is_dark_mode
    }

    pub fn palette<'a>(&self, colors: &'a ThemeColors) -> &'a Palette {
        if self.is_dark_mode {
            &colors.dark
        } else {
            &colors.light
        }
    }
}
