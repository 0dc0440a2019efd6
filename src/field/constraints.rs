//! Entry constraints handed to the text-entry surface.
//!
//! The reconciler never interprets these; it forwards them on every render so
//! the surface (platform keyboard, headless double) can enforce them.

use serde::Deserialize;

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Keyboard the surface should present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Digits only
    Numeric,
    /// Digits and a decimal separator
    Decimal,
    /// Free text
    #[default]
    Text,
}

impl InputKind {
    /// Characters a keyboard of this kind can produce
    pub fn char_filter(self) -> Option<CharFilter> {
        match self {
            InputKind::Numeric => Some(|c| c.is_ascii_digit()),
            InputKind::Decimal => Some(|c| c.is_ascii_digit() || c == '.'),
            InputKind::Text => None,
        }
    }
}

/// Constraints for a single bubble field's text-entry surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryConstraints {
    /// Keyboard kind
    pub input_kind: InputKind,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Opaque input mask, e.g. `"[099999999999999].[999999999]"`
    pub input_mask: Option<String>,
}

impl EntryConstraints {
    /// Free text, no limits
    pub fn text() -> Self {
        Self::default()
    }

    /// Digit-only entry
    pub fn numeric() -> Self {
        Self {
            input_kind: InputKind::Numeric,
            ..Self::default()
        }
    }

    /// Amount entry (digits and a decimal point)
    pub fn decimal() -> Self {
        Self {
            input_kind: InputKind::Decimal,
            ..Self::default()
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.input_mask = Some(mask.into());
        self
    }

    /// Check if a character can be produced by the configured keyboard
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.input_kind.char_filter() {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }

    /// Apply the constraints the way a platform text input would: drop
    /// characters the keyboard cannot produce, then truncate to max length.
    pub fn clamp(&self, raw: &str) -> String {
        let filtered = raw.chars().filter(|c| self.is_char_allowed(*c));
        match self.max_length {
            Some(max) => filtered.take(max).collect(),
            None => filtered.collect(),
        }
    }
}
