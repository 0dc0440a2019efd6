//! The text-entry surface a bubble field renders into.
//!
//! Any widget that can show text with a placeholder and constraints, and
//! report change/focus/blur events back to the field, can back a
//! [`BubbleField`](super::BubbleField). Focus control is optional: a surface
//! that cannot take focus programmatically keeps the default no-op.

use std::cell::Cell;

use crate::style::InputStyle;
use crate::theme::Color;

use super::constraints::EntryConstraints;
use super::messages::{BlurEvent, FieldMsg, FocusEvent};

/// Everything the surface needs to draw one frame of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceProps {
    /// Display text, always the formatted local value
    pub text: String,
    pub placeholder: Option<String>,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub constraints: EntryConstraints,
    pub auto_focus: bool,
    /// Test id for the input, `"{field_test_id}-input"`
    pub test_id: Option<String>,
    pub style: InputStyle,
}

/// Capability set of an underlying text-entry widget.
pub trait TextSurface {
    /// Draw the field with the given props
    fn render(&mut self, props: &SurfaceProps);

    /// Request keyboard focus. Surfaces without the capability ignore it.
    fn focus(&mut self) {}

    /// Whether the surface currently holds focus, if it can tell
    fn is_focused(&self) -> Option<bool> {
        None
    }
}

/// Imperative handle re-exposed to a field's owner.
///
/// Only focus control crosses this boundary; the owner never gets mutable
/// access to the surface itself.
pub struct FocusHandle<'a> {
    surface: &'a mut dyn TextSurface,
}

impl<'a> FocusHandle<'a> {
    pub(crate) fn new(surface: &'a mut dyn TextSurface) -> Self {
        Self { surface }
    }

    /// Move keyboard focus to the field
    pub fn focus(&mut self) {
        self.surface.focus();
    }

    /// Whether the surface reports holding focus (false when unknown)
    pub fn is_focused(&self) -> bool {
        self.surface.is_focused().unwrap_or(false)
    }
}

// =============================================================================
// MemorySurface - headless surface for tests and scenario replay
// =============================================================================

/// Headless surface that records what it was asked to draw.
///
/// It behaves like a platform input: typed text is clamped to the last
/// rendered constraints, and focus/blur produce the matching field messages.
#[derive(Debug, Default)]
pub struct MemorySurface {
    focused: Cell<bool>,
    focus_requests: usize,
    render_count: usize,
    props: Option<SurfaceProps>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown by the last render
    pub fn text(&self) -> Option<&str> {
        self.props.as_ref().map(|p| p.text.as_str())
    }

    /// Props of the last render
    pub fn props(&self) -> Option<&SurfaceProps> {
        self.props.as_ref()
    }

    /// Number of programmatic focus requests received
    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Simulate the user tapping into the field
    pub fn focus_event(&self) -> FieldMsg {
        self.focused.set(true);
        FieldMsg::Focus(FocusEvent {
            target: self.test_id(),
        })
    }

    /// Simulate the field losing focus
    pub fn blur_event(&self) -> FieldMsg {
        self.focused.set(false);
        FieldMsg::Blur(BlurEvent {
            target: self.test_id(),
        })
    }

    /// Simulate the user replacing the field contents with `raw`
    pub fn type_text(&self, raw: &str) -> FieldMsg {
        let text = match &self.props {
            Some(props) => props.constraints.clamp(raw),
            None => raw.to_string(),
        };
        FieldMsg::ChangeText(text)
    }

    /// Simulate appending `suffix` to the currently displayed text
    pub fn append_text(&self, suffix: &str) -> FieldMsg {
        let current = self.text().unwrap_or_default();
        self.type_text(&format!("{}{}", current, suffix))
    }

    fn test_id(&self) -> Option<String> {
        self.props.as_ref().and_then(|p| p.test_id.clone())
    }
}

impl TextSurface for MemorySurface {
    fn render(&mut self, props: &SurfaceProps) {
        // Platform inputs honor autofocus once, when first mounted
        if self.render_count == 0 && props.auto_focus {
            self.focused.set(true);
        }
        self.render_count += 1;
        self.props = Some(props.clone());
    }

    fn focus(&mut self) {
        self.focus_requests += 1;
        self.focused.set(true);
    }

    fn is_focused(&self) -> Option<bool> {
        Some(self.focused.get())
    }
}
