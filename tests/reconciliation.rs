//! Reconciliation tests - focus suppression, blur catch-up, button latch

mod common;

use std::sync::Arc;

use common::{render, shown, test_field};
use wallet_ui::field::{
    BlurEvent, FieldMsg, FieldOutput, FieldProps, FocusEvent, PressEvent, Reconciliation,
    TextSurface,
};
use wallet_ui::format::{self, FormatKind};

fn focus() -> FieldMsg {
    FieldMsg::Focus(FocusEvent::default())
}

fn blur() -> FieldMsg {
    FieldMsg::Blur(BlurEvent::default())
}

fn press() -> FieldMsg {
    FieldMsg::PressButton(PressEvent {
        label: Some("Max".into()),
    })
}

fn type_text(text: &str) -> FieldMsg {
    FieldMsg::ChangeText(text.to_string())
}

// ========================================================================
// Display
// ========================================================================

#[test]
fn test_display_is_formatted_local_value() {
    let props = FieldProps::new().with_format(FormatKind::Decimal { max_decimals: 2 });
    let (mut field, _) = test_field("", props);

    render(&mut field, "0012.3456");
    assert_eq!(field.state().local_value, "0012.3456");
    assert_eq!(field.display_text(), "12.34");
    assert_eq!(shown(&field), "12.34");
}

#[test]
fn test_display_idempotent_for_every_builtin_format() {
    let samples = ["", "0", "1a2", "..5", "007.1200", "abc", "1.2.3"];
    let kinds = [
        FormatKind::Identity,
        FormatKind::Digits,
        FormatKind::Decimal { max_decimals: 0 },
        FormatKind::Decimal { max_decimals: 3 },
        FormatKind::Fiat,
    ];

    for kind in kinds {
        let format = kind.formatter();
        for sample in samples {
            let once = format(sample);
            assert_eq!(format(&once), once, "{:?} on {:?}", kind, sample);
        }
    }
}

// ========================================================================
// on_change
// ========================================================================

#[test]
fn test_type_with_identity_formatter_and_async_echo() {
    let (mut field, log) = test_field("0", FieldProps::new());

    field.update(focus());
    let output = field.update(type_text("1"));
    assert_eq!(output, Some(FieldOutput::Changed("1".into())));
    assert_eq!(field.state().local_value, "1");
    assert_eq!(log.borrow().changes, vec!["1".to_string()]);

    // The owner has not echoed yet
    render(&mut field, "0");
    assert_eq!(shown(&field), "1");

    // Echo arrives
    render(&mut field, "1");
    assert_eq!(shown(&field), "1");
    assert_eq!(log.borrow().changes.len(), 1);
}

#[test]
fn test_strip_non_digits_formatter() {
    let props = FieldProps::new().with_formatter(Arc::new(format::digits_only));
    let (mut field, log) = test_field("", props);

    field.update(focus());
    field.update(type_text("1a2"));

    assert_eq!(field.state().local_value, "12");
    assert_eq!(log.borrow().changes, vec!["12".to_string()]);
}

#[test]
fn test_no_redundant_on_change() {
    let props = FieldProps::new().with_format(FormatKind::Digits);
    let (mut field, log) = test_field("12", props);

    field.update(focus());
    assert_eq!(field.update(type_text("12")), None);
    assert_eq!(field.update(type_text("1x2")), None);
    assert_eq!(field.update(type_text("12!")), None);
    assert!(log.borrow().changes.is_empty());

    field.update(type_text("123"));
    assert_eq!(log.borrow().changes, vec!["123".to_string()]);
}

#[test]
fn test_change_guard_compares_raw_local_value() {
    let props = FieldProps::new().with_format(FormatKind::Digits);
    let (mut field, log) = test_field("", props);

    // Adopted verbatim, displayed formatted
    render(&mut field, "1a2");
    assert_eq!(field.state().local_value, "1a2");
    assert_eq!(shown(&field), "12");

    field.update(focus());
    let output = field.update(type_text("12"));
    assert_eq!(output, Some(FieldOutput::Changed("12".into())));
    assert_eq!(field.state().local_value, "12");
    assert_eq!(log.borrow().changes, vec!["12".to_string()]);

    // Now the raw value matches, so the same input is a no-op
    assert_eq!(field.update(type_text("12")), None);
    assert_eq!(log.borrow().changes.len(), 1);
}

#[test]
fn test_typing_while_unfocused_still_applies() {
    let (mut field, log) = test_field("", FieldProps::new());

    field.update(type_text("5"));
    assert_eq!(field.state().local_value, "5");
    assert_eq!(log.borrow().changes.len(), 1);

    // Unfocused: the owner's value wins on the next pass
    render(&mut field, "");
    assert_eq!(shown(&field), "");
}

// ========================================================================
// Focus and blur
// ========================================================================

#[test]
fn test_focus_suppresses_foreign_adoption() {
    let (mut field, _) = test_field("1", FieldProps::new());

    field.update(focus());
    for external in ["2", "3", "4"] {
        assert_eq!(field.reconcile(external), Reconciliation::Suppressed);
        render(&mut field, external);
        assert_eq!(shown(&field), "1");
    }
}

#[test]
fn test_blur_triggers_catch_up_on_next_pass() {
    let (mut field, log) = test_field("1", FieldProps::new());

    field.update(focus());
    render(&mut field, "9");
    assert_eq!(shown(&field), "1");

    field.update(blur());
    // Blur alone does not adopt
    assert_eq!(field.state().local_value, "1");

    assert_eq!(
        field.reconcile("9"),
        Reconciliation::Adopted {
            latch_consumed: false
        }
    );
    render(&mut field, "9");
    assert_eq!(shown(&field), "9");
    assert_eq!(log.borrow().focuses, 1);
    assert_eq!(log.borrow().blurs, 1);
    // Adoption is not a user edit
    assert!(log.borrow().changes.is_empty());
}

#[test]
fn test_intermediate_values_dropped_while_focused_are_not_queued() {
    let (mut field, _) = test_field("1", FieldProps::new());

    field.update(focus());
    render(&mut field, "2");
    render(&mut field, "3");
    field.update(blur());
    render(&mut field, "4");

    assert_eq!(field.state().local_value, "4");
}

#[test]
fn test_unchanged_inputs_skip_the_pass() {
    let (mut field, _) = test_field("1", FieldProps::new());

    assert_eq!(field.reconcile("2"), Reconciliation::Adopted { latch_consumed: false });
    assert_eq!(field.reconcile("2"), Reconciliation::Skipped);
    render(&mut field, "2");
    assert_eq!(field.reconcile("2"), Reconciliation::Skipped);
}

#[test]
fn test_external_equal_to_local_is_noop() {
    let (mut field, _) = test_field("1", FieldProps::new());

    field.update(focus());
    field.update(type_text("7"));
    assert_eq!(field.reconcile("7"), Reconciliation::Equal);
}

// ========================================================================
// Button latch
// ========================================================================

#[test]
fn test_button_arms_latch_consumed_once() {
    let props = FieldProps::new().with_button_label("Max");
    let (mut field, log) = test_field("1", props);

    field.update(focus());
    field.update(press());
    assert!(field.state().button_armed);
    assert_eq!(field.surface().focus_requests(), 1);
    assert_eq!(log.borrow().presses.len(), 1);
    assert_eq!(log.borrow().presses[0].label.as_deref(), Some("Max"));

    // Owner injects the max balance
    assert_eq!(
        field.reconcile("100"),
        Reconciliation::Adopted {
            latch_consumed: true
        }
    );
    assert!(!field.state().button_armed);
    render(&mut field, "100");
    assert_eq!(shown(&field), "100");

    // Still focused: the next foreign value is suppressed again
    assert_eq!(field.reconcile("5"), Reconciliation::Suppressed);
    render(&mut field, "5");
    assert_eq!(shown(&field), "100");
}

#[test]
fn test_press_while_unfocused_requests_focus() {
    let props = FieldProps::new().with_button_label("Max");
    let (mut field, _) = test_field("1", props);

    field.update(press());
    assert_eq!(field.surface().focus_requests(), 1);
    assert_eq!(field.surface().is_focused(), Some(true));
}

#[test]
fn test_button_offered_only_while_focused_with_label() {
    let (mut plain, _) = test_field("1", FieldProps::new());
    plain.update(focus());
    assert!(!plain.is_button_visible());

    let (mut max, _) = test_field("1", FieldProps::new().with_button_label("Max"));
    assert!(!max.is_button_visible());
    max.update(focus());
    assert!(max.is_button_visible());
    max.update(blur());
    assert!(!max.is_button_visible());
}

// ========================================================================
// Surface
// ========================================================================

#[test]
fn test_surface_receives_test_id_and_constraints() {
    use wallet_ui::field::EntryConstraints;

    let props = FieldProps::new()
        .with_test_id("amount")
        .with_placeholder("0")
        .with_constraints(EntryConstraints::decimal().with_max_length(8));
    let (field, _) = test_field("", props);

    let surface_props = field.surface().props().unwrap();
    assert_eq!(surface_props.test_id.as_deref(), Some("amount-input"));
    assert_eq!(surface_props.placeholder.as_deref(), Some("0"));
    assert_eq!(surface_props.constraints.max_length, Some(8));
}

#[test]
fn test_auto_focus_seeds_focus() {
    let props = FieldProps::new().with_auto_focus(true);
    let (mut field, _) = test_field("1", props);

    assert!(field.state().is_focused);
    assert_eq!(field.reconcile("2"), Reconciliation::Suppressed);
}

#[test]
fn test_focus_handle_delegates_to_surface() {
    let (mut field, _) = test_field("", FieldProps::new());

    let mut handle = field.focus_handle();
    assert!(!handle.is_focused());
    handle.focus();
    assert!(handle.is_focused());
    assert_eq!(field.surface().focus_requests(), 1);
}
