//! Theme system for wallet screens
//!
//! Provides YAML-based palettes with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/wallet-ui/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::fmt;
use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "light", "dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/wallet-ui/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    /// Display name from YAML (e.g., "Wallet Dark")
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes, user themes shadowing builtins with the same id
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = from_file(&path)
                            .map(|t| t.name)
                            .unwrap_or_else(|_| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Same color at the given opacity (0.0 - 1.0), replacing any existing alpha
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBBAA"
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dark_mode: bool,
    pub palette: PaletteData,
    #[serde(default)]
    pub field: FieldThemeData,
}

/// Palette colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteData {
    pub dark: String,
    pub white: String,
    pub blue_grey_dark: String,
    pub lightest_grey: String,
    pub lighter_grey: String,
    #[serde(default)]
    pub shadow: Option<String>,
}

/// Bubble field opacity settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FieldThemeData {
    #[serde(default = "default_placeholder_alpha")]
    pub placeholder_alpha: f32,
    #[serde(default = "default_max_label_placeholder_alpha")]
    pub max_label_placeholder_alpha: f32,
    #[serde(default = "default_button_alpha")]
    pub button_alpha: f32,
    #[serde(default = "default_max_label_button_alpha")]
    pub max_label_button_alpha: f32,
}

fn default_placeholder_alpha() -> f32 {
    0.4
}

fn default_max_label_placeholder_alpha() -> f32 {
    0.32
}

fn default_button_alpha() -> f32 {
    0.06
}

fn default_max_label_button_alpha() -> f32 {
    0.048
}

impl Default for FieldThemeData {
    fn default() -> Self {
        Self {
            placeholder_alpha: default_placeholder_alpha(),
            max_label_placeholder_alpha: default_max_label_placeholder_alpha(),
            button_alpha: default_button_alpha(),
            max_label_button_alpha: default_max_label_button_alpha(),
        }
    }
}

/// Palette colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Primary text color
    pub dark: Color,
    /// Sheet background
    pub white: Color,
    pub blue_grey_dark: Color,
    /// Fallback NFT panel color
    pub lightest_grey: Color,
    /// Keyboard spacer background
    pub lighter_grey: Color,
    pub shadow: Color,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
    pub palette: Palette,
    pub field: FieldThemeData,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let dark = Color::from_hex(&data.palette.dark)?;
        Ok(Theme {
            name: data.name,
            dark_mode: data.dark_mode,
            palette: Palette {
                dark,
                white: Color::from_hex(&data.palette.white)?,
                blue_grey_dark: Color::from_hex(&data.palette.blue_grey_dark)?,
                lightest_grey: Color::from_hex(&data.palette.lightest_grey)?,
                lighter_grey: Color::from_hex(&data.palette.lighter_grey)?,
                shadow: data
                    .palette
                    .shadow
                    .as_ref()
                    .map(|s| Color::from_hex(s))
                    .transpose()?
                    .unwrap_or(dark),
            },
            field: data.field,
        })
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        match Theme::from_yaml(LIGHT_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Wallet Light".to_string(),
                dark_mode: false,
                palette: Palette {
                    dark: Color::rgb(0x25, 0x29, 0x2E),
                    white: Color::rgb(0xFF, 0xFF, 0xFF),
                    blue_grey_dark: Color::rgb(0x3C, 0x42, 0x52),
                    lightest_grey: Color::rgb(0xE9, 0xEB, 0xEF),
                    lighter_grey: Color::rgb(0xF7, 0xF7, 0xF8),
                    shadow: Color::rgb(0x25, 0x29, 0x2E),
                },
                field: FieldThemeData::default(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}
