//! Per-render style resolution
//!
//! Device and color-scheme variants are selected from an explicit
//! [`StyleKey`] built from the injected [`ViewportInfo`] and the active
//! [`Theme`]. Nothing here reads global device state; callers pass the
//! viewport owned by the platform layer, recomputed on layout or orientation
//! change.

use serde::Deserialize;

use crate::theme::{Color, Theme};

/// Height at or below which a device counts as a tiny phone (iPhone SE class)
pub const TINY_PHONE_MAX_HEIGHT: f32 = 568.0;

/// Height at or below which a device counts as a small phone (iPhone 8 class)
pub const SMALL_PHONE_MAX_HEIGHT: f32 = 667.0;

/// Target platform of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

/// Safe-area insets in points
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SafeAreaInsets {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub right: f32,
}

/// Viewport measurements supplied by the platform integration layer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportInfo {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub safe_area: SafeAreaInsets,
    #[serde(default)]
    pub platform: Platform,
}

impl Default for ViewportInfo {
    /// A notched 414x896 phone
    fn default() -> Self {
        Self {
            width: 414.0,
            height: 896.0,
            safe_area: SafeAreaInsets {
                top: 44.0,
                bottom: 34.0,
                left: 0.0,
                right: 0.0,
            },
            platform: Platform::Ios,
        }
    }
}

impl ViewportInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            safe_area: SafeAreaInsets::default(),
            platform: Platform::default(),
        }
    }

    pub fn with_safe_area(mut self, safe_area: SafeAreaInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn tier(&self) -> DeviceTier {
        DeviceTier::from_viewport(self)
    }
}

/// Device size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    Tiny,
    Small,
    Regular,
}

impl DeviceTier {
    pub fn from_viewport(viewport: &ViewportInfo) -> Self {
        if viewport.height <= TINY_PHONE_MAX_HEIGHT {
            DeviceTier::Tiny
        } else if viewport.height <= SMALL_PHONE_MAX_HEIGHT {
            DeviceTier::Small
        } else {
            DeviceTier::Regular
        }
    }

    pub fn is_tiny(self) -> bool {
        self == DeviceTier::Tiny
    }
}

/// Enumerated inputs of a style lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub tier: DeviceTier,
    pub dark_mode: bool,
    pub platform: Platform,
}

impl StyleKey {
    pub fn new(viewport: &ViewportInfo, theme: &Theme) -> Self {
        Self {
            tier: viewport.tier(),
            dark_mode: theme.dark_mode,
            platform: viewport.platform,
        }
    }
}

/// Environment a component is rendered in: the injected viewport and the
/// active theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderEnv {
    pub viewport: ViewportInfo,
    pub theme: Theme,
}

impl RenderEnv {
    pub fn new(viewport: ViewportInfo, theme: Theme) -> Self {
        Self { viewport, theme }
    }

    pub fn style_key(&self) -> StyleKey {
        StyleKey::new(&self.viewport, &self.theme)
    }
}

/// Type scale entries used by bubble inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Big,
    Bigger,
    #[default]
    H3,
}

impl FontSize {
    /// Size in points
    pub fn points(self) -> f32 {
        match self {
            FontSize::Big => 22.0,
            FontSize::Bigger => 23.0,
            FontSize::H3 => 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Regular,
    #[default]
    Semibold,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterSpacing {
    #[default]
    RoundedTightest,
    RoundedMedium,
}

impl LetterSpacing {
    /// Tracking in points
    pub fn points(self) -> f32 {
        match self {
            LetterSpacing::RoundedTightest => -0.5,
            LetterSpacing::RoundedMedium => 0.5,
        }
    }
}

/// Keyboard appearance requested from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardAppearance {
    #[default]
    Light,
    Dark,
}

/// Typography and box metrics of the bubble input
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputStyle {
    pub font_size: FontSize,
    pub weight: FontWeight,
    pub letter_spacing: LetterSpacing,
    pub tabular_nums: bool,
    pub keyboard_appearance: KeyboardAppearance,
    /// Fixed height (Android only)
    pub height: Option<f32>,
    /// Vertical padding override (Android only)
    pub vertical_padding: Option<f32>,
    pub margin_right: f32,
}

impl InputStyle {
    /// Pure lookup from variant keys to concrete values
    pub fn resolve(key: StyleKey) -> Self {
        let font_size = match key.tier {
            DeviceTier::Tiny => FontSize::Big,
            DeviceTier::Small => FontSize::Bigger,
            DeviceTier::Regular => FontSize::H3,
        };
        let keyboard_appearance = if key.dark_mode {
            KeyboardAppearance::Dark
        } else {
            KeyboardAppearance::Light
        };
        let (height, vertical_padding) = match key.platform {
            Platform::Android => (Some(40.0), Some(0.0)),
            Platform::Ios => (None, None),
        };

        Self {
            font_size,
            weight: FontWeight::Semibold,
            letter_spacing: LetterSpacing::RoundedTightest,
            tabular_nums: false,
            keyboard_appearance,
            height,
            vertical_padding,
            margin_right: 10.0,
        }
    }
}

/// The small action button ("Max") next to a bubble input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiniButtonStyle {
    pub background: Color,
    pub foreground: Color,
    pub weight: FontWeight,
    pub letter_spacing: LetterSpacing,
}

/// Fully resolved style of one bubble field for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub input: InputStyle,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub button: MiniButtonStyle,
}

impl FieldStyle {
    /// Resolve colors for an asset-tinted field.
    ///
    /// `max_label_color` selects the muted variant used when the field sits
    /// next to a "max" label.
    pub fn resolve(key: StyleKey, theme: &Theme, asset_color: Color, max_label_color: bool) -> Self {
        let alphas = &theme.field;
        let placeholder_color = if max_label_color {
            theme
                .palette
                .blue_grey_dark
                .with_opacity(alphas.max_label_placeholder_alpha)
        } else {
            asset_color.with_opacity(alphas.placeholder_alpha)
        };
        let button_alpha = if max_label_color {
            alphas.max_label_button_alpha
        } else {
            alphas.button_alpha
        };

        Self {
            input: InputStyle::resolve(key),
            text_color: asset_color,
            placeholder_color,
            button: MiniButtonStyle {
                background: asset_color.with_opacity(button_alpha),
                foreground: asset_color,
                weight: FontWeight::Heavy,
                letter_spacing: LetterSpacing::RoundedMedium,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(height: f32, dark_mode: bool, platform: Platform) -> StyleKey {
        let viewport = ViewportInfo::new(375.0, height).with_platform(platform);
        StyleKey {
            tier: viewport.tier(),
            dark_mode,
            platform,
        }
    }

    #[test]
    fn test_device_tiers() {
        assert_eq!(ViewportInfo::new(320.0, 568.0).tier(), DeviceTier::Tiny);
        assert_eq!(ViewportInfo::new(375.0, 667.0).tier(), DeviceTier::Small);
        assert_eq!(ViewportInfo::new(414.0, 896.0).tier(), DeviceTier::Regular);
    }

    #[test]
    fn test_font_size_by_tier() {
        assert_eq!(InputStyle::resolve(key(568.0, false, Platform::Ios)).font_size, FontSize::Big);
        assert_eq!(
            InputStyle::resolve(key(667.0, false, Platform::Ios)).font_size,
            FontSize::Bigger
        );
        assert_eq!(InputStyle::resolve(key(896.0, false, Platform::Ios)).font_size, FontSize::H3);
    }

    #[test]
    fn test_keyboard_appearance_follows_color_scheme() {
        let dark = InputStyle::resolve(key(896.0, true, Platform::Ios));
        let light = InputStyle::resolve(key(896.0, false, Platform::Ios));
        assert_eq!(dark.keyboard_appearance, KeyboardAppearance::Dark);
        assert_eq!(light.keyboard_appearance, KeyboardAppearance::Light);
    }

    #[test]
    fn test_android_metrics() {
        let android = InputStyle::resolve(key(896.0, false, Platform::Android));
        assert_eq!(android.height, Some(40.0));
        assert_eq!(android.vertical_padding, Some(0.0));
        let ios = InputStyle::resolve(key(896.0, false, Platform::Ios));
        assert_eq!(ios.height, None);
        assert_eq!(ios.margin_right, 10.0);
    }

    #[test]
    fn test_field_colors() {
        let theme = Theme::default();
        let asset = Color::rgb(0x62, 0x7E, 0xEA);
        let k = key(896.0, false, Platform::Ios);

        let normal = FieldStyle::resolve(k, &theme, asset, false);
        assert_eq!(normal.text_color, asset);
        assert_eq!(normal.placeholder_color, asset.with_opacity(0.4));
        assert_eq!(normal.button.background, asset.with_opacity(0.06));

        let muted = FieldStyle::resolve(k, &theme, asset, true);
        assert_eq!(
            muted.placeholder_color,
            theme.palette.blue_grey_dark.with_opacity(0.32)
        );
        assert_eq!(muted.button.background, asset.with_opacity(0.048));
    }

    #[test]
    fn test_style_key_usable_as_cache_key() {
        use std::collections::HashMap;

        let theme = Theme::default();
        let ios = StyleKey::new(&ViewportInfo::default(), &theme);
        let android = StyleKey::new(
            &ViewportInfo::default().with_platform(Platform::Android),
            &theme,
        );

        let mut cache = HashMap::new();
        cache.insert(ios, InputStyle::resolve(ios));
        cache.insert(android, InputStyle::resolve(android));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache[&android].height, Some(40.0));
        assert_eq!(cache[&ios].height, None);
    }
}
