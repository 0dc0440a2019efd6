//! BubbleField - a controlled text field that keeps local edits in sync with
//! an owner-supplied value.
//!
//! The owner re-renders the field with its current value on every cycle.
//! User events mutate the local state immediately; the owner's value is only
//! adopted by a reconciliation pass, and only when the user is not mid-edit
//! or the action button asked for it.

use crate::style::{FieldStyle, MiniButtonStyle, RenderEnv};

#[cfg(debug_assertions)]
use crate::tracing::FieldSnapshot;

use super::messages::{BlurEvent, FieldMsg, FieldOutput, FocusEvent, PressEvent};
use super::props::{FieldCallbacks, FieldProps};
use super::surface::{FocusHandle, SurfaceProps, TextSurface};

/// Local state of one field instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// True between a focus event and the next blur
    pub is_focused: bool,
    /// Last typed or last adopted value; the display source
    pub local_value: String,
    /// One-shot latch set by the action button, cleared by the adoption it forces
    pub button_armed: bool,
}

/// Outcome of a reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Inputs unchanged since the previous pass, nothing evaluated
    Skipped,
    /// External value already matches the local value
    Equal,
    /// Focused with the latch unarmed: the external value was dropped
    Suppressed,
    /// External value adopted
    Adopted { latch_consumed: bool },
}

impl Reconciliation {
    pub fn adopted(self) -> bool {
        matches!(self, Reconciliation::Adopted { .. })
    }

    pub fn label(self) -> &'static str {
        match self {
            Reconciliation::Skipped => "skipped",
            Reconciliation::Equal => "equal",
            Reconciliation::Suppressed => "suppressed",
            Reconciliation::Adopted {
                latch_consumed: false,
            } => "adopted",
            Reconciliation::Adopted {
                latch_consumed: true,
            } => "adopted (latch)",
        }
    }
}

/// Inputs a pass was evaluated with. A pass only runs when these differ from
/// the previous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PassInputs {
    external: String,
    local_value: String,
    is_focused: bool,
    button_armed: bool,
}

/// The action button as rendered next to the input
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub style: MiniButtonStyle,
}

/// One rendered frame of a field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub surface: SurfaceProps,
    /// Pointer events reach the field only while focused
    pub interactive: bool,
    pub button: Option<ButtonView>,
}

/// Editable "bubble" input bound to an owner-controlled value.
pub struct BubbleField<S: TextSurface> {
    props: FieldProps,
    callbacks: FieldCallbacks,
    surface: S,
    state: FieldState,
    external: String,
    last_pass: Option<PassInputs>,
}

impl<S: TextSurface> BubbleField<S> {
    /// Create a field showing `value`, focused if `props.auto_focus` is set
    pub fn new(value: impl Into<String>, props: FieldProps, surface: S) -> Self {
        let value = value.into();
        Self {
            state: FieldState {
                is_focused: props.auto_focus,
                local_value: value.clone(),
                button_armed: false,
            },
            external: value,
            props,
            callbacks: FieldCallbacks::default(),
            surface,
            last_pass: None,
        }
    }

    pub fn with_callbacks(mut self, callbacks: FieldCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: FieldCallbacks) {
        self.callbacks = callbacks;
    }

    /// Replace the props. `auto_focus` only seeds the initial state and is
    /// not re-applied.
    pub fn set_props(&mut self, props: FieldProps) {
        self.props = props;
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Last value supplied by the owner
    pub fn external_value(&self) -> &str {
        &self.external
    }

    /// Read-only access to the underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Text the surface shows: always the formatted local value
    pub fn display_text(&self) -> String {
        (self.props.format)(&self.state.local_value)
    }

    /// The action button is offered only while focused
    pub fn is_button_visible(&self) -> bool {
        self.props.button_label.is_some() && self.state.is_focused
    }

    /// Request focus on the underlying surface
    pub fn focus(&mut self) {
        self.surface.focus();
    }

    /// Imperative handle for the owner
    pub fn focus_handle(&mut self) -> FocusHandle<'_> {
        FocusHandle::new(&mut self.surface)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Dispatch an inbound message
    pub fn update(&mut self, msg: FieldMsg) -> Option<FieldOutput> {
        #[cfg(debug_assertions)]
        let before = FieldSnapshot::capture(self);
        #[cfg(debug_assertions)]
        let kind = if msg.is_editing() {
            "edit"
        } else if msg.is_focus_change() {
            "focus"
        } else {
            "press"
        };

        let output = match msg {
            FieldMsg::Focus(event) => Some(self.handle_focus(event)),
            FieldMsg::Blur(event) => Some(self.handle_blur(event)),
            FieldMsg::PressButton(event) => Some(self.handle_button_press(event)),
            FieldMsg::ChangeText(raw) => self.handle_change_text(&raw),
        };

        #[cfg(debug_assertions)]
        {
            if let Some(diff) = before.diff(&FieldSnapshot::capture(self)) {
                tracing::debug!(target: "field", "{}: {}", kind, diff);
            }
        }

        output
    }

    pub fn handle_focus(&mut self, event: FocusEvent) -> FieldOutput {
        self.state.is_focused = true;
        self.callbacks.emit_focus(&event);
        FieldOutput::Focused(event)
    }

    /// Blur only clears focus. A pending external value is picked up by the
    /// next reconciliation pass, not here.
    pub fn handle_blur(&mut self, event: BlurEvent) -> FieldOutput {
        self.state.is_focused = false;
        self.callbacks.emit_blur(&event);
        FieldOutput::Blurred(event)
    }

    /// Focus the surface and arm the latch so the value the owner is about
    /// to inject is adopted even though the field keeps focus.
    pub fn handle_button_press(&mut self, event: PressEvent) -> FieldOutput {
        self.surface.focus();
        self.state.button_armed = true;
        tracing::trace!(target: "field", "button latch armed");
        self.callbacks.emit_press_button(&event);
        FieldOutput::ButtonPressed(event)
    }

    /// Apply user input. Returns `None` when formatting collapses the input
    /// onto the current value.
    ///
    /// The comparison is against the raw local value, not the displayed text.
    /// After adopting an unformatted external value (e.g. `"1a2"` shown as
    /// `"12"`), input that formats to `"12"` still emits `on_change("12")`.
    pub fn handle_change_text(&mut self, raw: &str) -> Option<FieldOutput> {
        let candidate = (self.props.format)(raw);
        if candidate == self.state.local_value {
            tracing::trace!(target: "field", "input {:?} formats to current value", raw);
            return None;
        }

        self.state.local_value = candidate.clone();
        self.callbacks.emit_change(&candidate);
        Some(FieldOutput::Changed(candidate))
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Reconcile against the owner's current value.
    ///
    /// Edge-triggered: when the external value and the local state are the
    /// same as at the end of the previous pass, nothing is evaluated.
    pub fn reconcile(&mut self, external: &str) -> Reconciliation {
        if self.external != external {
            self.external = external.to_string();
        }

        let inputs = self.pass_inputs();
        if self.last_pass.as_ref() == Some(&inputs) {
            return Reconciliation::Skipped;
        }

        let outcome = if self.external == self.state.local_value {
            Reconciliation::Equal
        } else if self.state.is_focused && !self.state.button_armed {
            tracing::debug!(
                target: "field",
                "focused, keeping {:?} over external {:?}",
                self.state.local_value,
                self.external
            );
            Reconciliation::Suppressed
        } else {
            let latch_consumed = self.state.button_armed;
            tracing::debug!(
                target: "field",
                "adopting external {:?} (was {:?}, latch_consumed={})",
                self.external,
                self.state.local_value,
                latch_consumed
            );
            self.state.local_value = self.external.clone();
            self.state.button_armed = false;
            Reconciliation::Adopted { latch_consumed }
        };

        self.last_pass = Some(self.pass_inputs());
        outcome
    }

    fn pass_inputs(&self) -> PassInputs {
        PassInputs {
            external: self.external.clone(),
            local_value: self.state.local_value.clone(),
            is_focused: self.state.is_focused,
            button_armed: self.state.button_armed,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the current frame without touching state
    pub fn view(&self, env: &RenderEnv) -> FieldView {
        let style = FieldStyle::resolve(
            env.style_key(),
            &env.theme,
            self.props.asset_color,
            self.props.max_label_color,
        );

        let button = match &self.props.button_label {
            Some(label) if self.state.is_focused => Some(ButtonView {
                label: label.clone(),
                style: style.button,
            }),
            _ => None,
        };

        FieldView {
            surface: SurfaceProps {
                text: self.display_text(),
                placeholder: self.props.placeholder.clone(),
                text_color: style.text_color,
                placeholder_color: style.placeholder_color,
                constraints: self.props.constraints.clone(),
                auto_focus: self.props.auto_focus,
                test_id: self.props.input_test_id(),
                style: style.input,
            },
            interactive: self.state.is_focused,
            button,
        }
    }

    /// Owner render cycle: reconcile with `external`, then draw the surface
    pub fn render(&mut self, external: &str, env: &RenderEnv) -> FieldView {
        self.reconcile(external);
        let view = self.view(env);
        self.surface.render(&view.surface);
        view
    }
}

impl<S: TextSurface + std::fmt::Debug> std::fmt::Debug for BubbleField<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubbleField")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("external", &self.external)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
