// SPDX-License-Identifier: MPL-2.0
//! Headline figures.

use crate::content::Stat;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{Column, Text};
use iced::{Color, Element, Length};

/// Figure over its caption, centered in the cell.
pub fn stat<'a, Message: 'a>(stat: &'a Stat, value_color: Color, label_color: Color) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(stat.value.as_str())
                .size(typography::STAT)
                .color(value_color),
        )
        .push(
            Text::new(stat.label.as_str())
                .size(typography::CAPTION)
                .color(label_color),
        )
        .into()
}
