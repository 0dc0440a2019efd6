//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging field
//! reconciliation and focus transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=field=trace` - every field transition and latch change
//! - `RUST_LOG=wallet_ui::send_form=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/wallet-ui/logs/wallet-ui.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::field::{BubbleField, TextSurface};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding apps) keeps the existing subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub display: String,
    pub local_value: String,
    pub focused: bool,
    pub armed: bool,
}

impl FieldSnapshot {
    pub fn capture<S: TextSurface>(field: &BubbleField<S>) -> Self {
        let state = field.state();
        Self {
            display: field.display_text(),
            local_value: state.local_value.clone(),
            focused: state.is_focused,
            armed: state.button_armed,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.local_value != other.local_value {
            changes.push(format!(
                "value: {:?} → {:?}",
                self.local_value, other.local_value
            ));
        }
        if self.display != other.display {
            changes.push(format!("display: {:?} → {:?}", self.display, other.display));
        }
        if self.focused != other.focused {
            let status = if other.focused { "focused" } else { "blurred" };
            changes.push(status.to_string());
        }
        if self.armed != other.armed {
            let status = if other.armed { "armed" } else { "cleared" };
            changes.push(format!("latch {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
