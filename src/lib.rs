//! wallet-ui - controlled amount inputs for a wallet front end
//!
//! This crate provides the bubble field reconciler and the pieces of wallet
//! UI built around it: formatters, themes and device-dependent styles, the
//! send-asset form and the NFT detail panel model.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod field;
pub mod format;
pub mod panel;
pub mod scenario;
pub mod send_form;
pub mod style;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::AppConfig;
pub use field::{BubbleField, FieldMsg, FieldOutput, FieldProps};
pub use style::RenderEnv;
pub use theme::Theme;
