// SPDX-License-Identifier: MPL-2.0
//! Blocking acknowledgement shown after a contact submission.
//!
//! The dialog covers the page and swallows every pointer event until it is
//! dismissed with its single button.

use crate::content::ContactContent;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, opaque, Column, Container, Stack, Text},
    Element, Length,
};

/// Result of a submission, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss,
}

/// Localized text the dialog shows for an outcome.
#[must_use]
pub fn text(content: &ContactContent, outcome: Outcome) -> &str {
    match outcome {
        Outcome::Sent => &content.sent,
        Outcome::Failed => &content.send_failed,
    }
}

/// Overlays the dialog on top of `base`.
pub fn view<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    content: &'a ContactContent,
    outcome: Outcome,
    on_message: impl Fn(Message) -> M,
) -> Element<'a, M> {
    let (icon, accent) = match outcome {
        Outcome::Sent => (Icon::Check, palette::SUCCESS_500),
        Outcome::Failed => (Icon::Close, palette::ERROR_500),
    };

    let dialog = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(icons::sized(icon, sizing::ICON_XL).color(accent))
        .push(
            Text::new(text(content, outcome))
                .size(typography::BODY_LG)
                .color(palette::GRAY_900),
        )
        .push(
            button(Text::new(content.acknowledge.as_str()).size(typography::BODY))
                .on_press(on_message(Message::Dismiss))
                .padding([spacing::XS, spacing::XL])
                .style(styles::button::primary),
        );

    let dialog = Container::new(dialog)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .style(styles::container::dialog);

    let backdrop = Container::new(dialog)
        .center(Length::Fill)
        .style(styles::container::modal_backdrop);

    Stack::new().push(base).push(opaque(backdrop)).into()
}
