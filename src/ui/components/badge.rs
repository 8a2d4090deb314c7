// SPDX-License-Identifier: MPL-2.0
//! Icon badges.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use iced::widget::{container, Container};
use iced::{Element, Theme};

/// Icon on a light brand badge.
pub fn soft<'a, Message: 'a>(icon: Icon) -> Element<'a, Message> {
    badge(icon, sizing::ICON_MD, styles::container::icon_badge)
}

/// Icon on a filled brand badge.
pub fn solid<'a, Message: 'a>(icon: Icon) -> Element<'a, Message> {
    badge(icon, sizing::ICON_SM, styles::container::icon_badge_solid)
}

fn badge<'a, Message: 'a>(
    icon: Icon,
    size: f32,
    style: fn(&Theme) -> container::Style,
) -> Element<'a, Message> {
    Container::new(icons::sized(icon, size))
        .padding(spacing::SM)
        .style(style)
        .into()
}
