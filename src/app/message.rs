// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::portfolio;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Portfolio(portfolio::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// The window was resized to this width.
    WindowResized(f32),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Category slug to open, overriding the one saved last session.
    pub category: Option<String>,
    /// Portfolio JSON file, overriding `[portfolio] data_path`.
    pub data_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `FOLIO_WHEEL_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_WHEEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
