//! Bubble fields: controlled text inputs for amount entry.
//!
//! A bubble field owns the text the user is editing while its owner owns the
//! value of record. The two are reconciled on every render pass:
//!
//! - while the user types, the owner's value never overwrites local input
//! - once the field is blurred, the owner's value wins again
//! - the action button (e.g. "Max") arms a one-shot latch so the value the
//!   owner injects in response is adopted even though the field keeps focus
//!
//! # Architecture
//!
//! - [`BubbleField`]: the reconciler, generic over its surface
//! - [`TextSurface`]: the text-entry widget it draws into
//! - [`MemorySurface`]: headless surface for tests and scenario replay
//! - [`FieldProps`] / [`FieldCallbacks`]: owner configuration
//! - [`FieldMsg`] / [`FieldOutput`]: inbound events, outbound notifications
//!
//! # Example
//!
//! ```
//! use wallet_ui::field::{BubbleField, FieldMsg, FieldProps, FocusEvent, MemorySurface};
//! use wallet_ui::format::FormatKind;
//!
//! let props = FieldProps::new().with_format(FormatKind::Digits);
//! let mut field = BubbleField::new("0", props, MemorySurface::new());
//!
//! field.update(FieldMsg::Focus(FocusEvent::default()));
//! field.update(FieldMsg::ChangeText("1a2".into()));
//! assert_eq!(field.display_text(), "12");
//!
//! // The owner has not caught up yet; its stale value is ignored while focused
//! field.reconcile("0");
//! assert_eq!(field.display_text(), "12");
//! ```

mod constraints;
mod messages;
mod props;
mod state;
mod surface;

pub use constraints::{CharFilter, EntryConstraints, InputKind};
pub use messages::{BlurEvent, FieldMsg, FieldOutput, FocusEvent, PressEvent};
pub use props::{FieldCallbacks, FieldProps, DEFAULT_ASSET_COLOR};
pub use state::{BubbleField, ButtonView, FieldState, FieldView, Reconciliation};
pub use surface::{FocusHandle, MemorySurface, SurfaceProps, TextSurface};
