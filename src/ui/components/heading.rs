// SPDX-License-Identifier: MPL-2.0
//! Centered section heading.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{Column, Text};
use iced::{Element, Length};

/// Section title over a muted subtitle, both centered.
pub fn section_heading<'a, Message: 'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .color(palette::GRAY_600),
        )
        .into()
}
