//! Owner-supplied configuration and callbacks for a bubble field.

use std::fmt;

use crate::format::{self, FormatKind, Formatter};
use crate::theme::Color;

use super::constraints::EntryConstraints;
use super::messages::{BlurEvent, FocusEvent, PressEvent};

/// Tint used when the owner does not supply an asset color
pub const DEFAULT_ASSET_COLOR: Color = Color::rgb(0x25, 0x29, 0x2E);

/// Configuration of a bubble field, re-supplied by the owner on each render.
#[derive(Clone)]
pub struct FieldProps {
    /// Display projection, must be idempotent
    pub format: Formatter,
    /// Seed the field as focused
    pub auto_focus: bool,
    /// Label of the action button offered while focused (e.g. "Max")
    pub button_label: Option<String>,
    pub placeholder: Option<String>,
    /// Passed through to the surface untouched
    pub constraints: EntryConstraints,
    /// Test id of the field; the surface gets `"{test_id}-input"`
    pub test_id: Option<String>,
    pub asset_color: Color,
    /// Use the muted placeholder/button variant
    pub max_label_color: bool,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            format: format::identity(),
            auto_focus: false,
            button_label: None,
            placeholder: None,
            constraints: EntryConstraints::default(),
            test_id: None,
            asset_color: DEFAULT_ASSET_COLOR,
            max_label_color: false,
        }
    }
}

impl fmt::Debug for FieldProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldProps")
            .field("auto_focus", &self.auto_focus)
            .field("button_label", &self.button_label)
            .field("placeholder", &self.placeholder)
            .field("constraints", &self.constraints)
            .field("test_id", &self.test_id)
            .field("asset_color", &self.asset_color)
            .field("max_label_color", &self.max_label_color)
            .finish_non_exhaustive()
    }
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(mut self, format: Formatter) -> Self {
        self.format = format;
        self
    }

    pub fn with_format(self, kind: FormatKind) -> Self {
        self.with_formatter(kind.formatter())
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_constraints(mut self, constraints: EntryConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_asset_color(mut self, color: Color) -> Self {
        self.asset_color = color;
        self
    }

    pub fn with_max_label_color(mut self, max_label_color: bool) -> Self {
        self.max_label_color = max_label_color;
        self
    }

    /// Test id handed to the surface
    pub fn input_test_id(&self) -> Option<String> {
        self.test_id.as_ref().map(|id| format!("{}-input", id))
    }
}

/// Optional owner callbacks. Unset callbacks are skipped.
#[derive(Default)]
pub struct FieldCallbacks {
    pub on_change: Option<Box<dyn FnMut(&str)>>,
    pub on_focus: Option<Box<dyn FnMut(&FocusEvent)>>,
    pub on_blur: Option<Box<dyn FnMut(&BlurEvent)>>,
    pub on_press_button: Option<Box<dyn FnMut(&PressEvent)>>,
}

impl fmt::Debug for FieldCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_press_button", &self.on_press_button.is_some())
            .finish()
    }
}

impl FieldCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut(&FocusEvent) + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut(&BlurEvent) + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_press_button(mut self, f: impl FnMut(&PressEvent) + 'static) -> Self {
        self.on_press_button = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_change(&mut self, value: &str) {
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
    }

    pub(crate) fn emit_focus(&mut self, event: &FocusEvent) {
        if let Some(cb) = self.on_focus.as_mut() {
            cb(event);
        }
    }

    pub(crate) fn emit_blur(&mut self, event: &BlurEvent) {
        if let Some(cb) = self.on_blur.as_mut() {
            cb(event);
        }
    }

    pub(crate) fn emit_press_button(&mut self, event: &PressEvent) {
        if let Some(cb) = self.on_press_button.as_mut() {
            cb(event);
        }
    }
}
