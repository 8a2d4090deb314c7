// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{acknowledgement, contact, header, hero, services};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Services(services::Message),
    Contact(contact::Message),
    Acknowledgement(acknowledgement::Message),
    /// The window changed size; selects the wide or compact layout.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`zh`, `en`, `en-US`, ...).
    pub lang: Option<String>,
    /// Optional start section (`home`, `services`, `about`, `contact`).
    pub section: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CARNELLI_MARINE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
