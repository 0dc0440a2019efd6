//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wallet_ui::field::{
    BlurEvent, BubbleField, FieldCallbacks, FieldProps, FocusEvent, MemorySurface, PressEvent,
};
use wallet_ui::style::RenderEnv;

/// Values the field reported to its owner
#[derive(Debug, Default)]
pub struct Recorded {
    pub changes: Vec<String>,
    pub focuses: usize,
    pub blurs: usize,
    pub presses: Vec<PressEvent>,
}

pub type Log = Rc<RefCell<Recorded>>;

/// Create a field over a memory surface, with every callback recorded
pub fn test_field(value: &str, props: FieldProps) -> (BubbleField<MemorySurface>, Log) {
    let log: Log = Rc::default();

    let callbacks = FieldCallbacks::new()
        .on_change({
            let log = Rc::clone(&log);
            move |v: &str| log.borrow_mut().changes.push(v.to_string())
        })
        .on_focus({
            let log = Rc::clone(&log);
            move |_: &FocusEvent| log.borrow_mut().focuses += 1
        })
        .on_blur({
            let log = Rc::clone(&log);
            move |_: &BlurEvent| log.borrow_mut().blurs += 1
        })
        .on_press_button({
            let log = Rc::clone(&log);
            move |e: &PressEvent| log.borrow_mut().presses.push(e.clone())
        });

    let mut field = BubbleField::new(value, props, MemorySurface::new()).with_callbacks(callbacks);
    field.render(value, &RenderEnv::default());
    (field, log)
}

/// Owner render pass with the default environment
pub fn render(field: &mut BubbleField<MemorySurface>, external: &str) {
    field.render(external, &RenderEnv::default());
}

/// Text currently shown by the surface
pub fn shown(field: &BubbleField<MemorySurface>) -> String {
    field.surface().text().unwrap_or_default().to_string()
}
