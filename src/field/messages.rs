//! Message and event types for bubble fields.

/// Focus gained on the text-entry surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusEvent {
    /// Test id of the surface that produced the event
    pub target: Option<String>,
}

/// Focus lost on the text-entry surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlurEvent {
    pub target: Option<String>,
}

/// The field's action button was pressed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PressEvent {
    /// Label of the pressed button (e.g. "Max")
    pub label: Option<String>,
}

/// Inbound events for a bubble field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMsg {
    /// Surface gained focus
    Focus(FocusEvent),
    /// Surface lost focus
    Blur(BlurEvent),
    /// Action button pressed
    PressButton(PressEvent),
    /// Raw text reported by the surface after a keystroke or paste
    ChangeText(String),
}

impl FieldMsg {
    /// Check if this message changes focus state
    pub fn is_focus_change(&self) -> bool {
        matches!(self, FieldMsg::Focus(_) | FieldMsg::Blur(_))
    }

    /// Check if this message is user input
    pub fn is_editing(&self) -> bool {
        matches!(self, FieldMsg::ChangeText(_))
    }
}

/// Outbound notifications, mirrored to the registered callbacks.
///
/// Owners following the update/return style can react to these instead of
/// installing callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutput {
    /// Formatted value after a user edit
    Changed(String),
    Focused(FocusEvent),
    Blurred(BlurEvent),
    ButtonPressed(PressEvent),
}
