// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window size changes are observed; every other interaction arrives
//! through widget messages.

use super::Message;
use iced::{window, Subscription};

/// Reports window size changes so the layout can switch at the breakpoint.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
