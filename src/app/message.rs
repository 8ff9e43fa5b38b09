// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feedback;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Feedback(feedback::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FEEDBACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme mode override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
}
