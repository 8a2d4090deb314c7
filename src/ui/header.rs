// SPDX-License-Identifier: MPL-2.0
//! Site header with section navigation and the language toggle.
//!
//! On wide layouts the four navigation entries sit inline next to the
//! toggle. On compact layouts they collapse into a dropdown menu opened by a
//! menu button. Whether that menu is open is the header's own state: the
//! parent stores the flag but only this module changes it.

use crate::content::HeaderContent;
use crate::domain::site::{LanguageTag, SectionId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub content: &'a HeaderContent,
    pub section: SectionId,
    pub menu_open: bool,
    pub layout: Layout,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Inline navigation entry pressed (wide layout).
    Navigate(SectionId),
    /// Dropdown navigation entry pressed (compact layout).
    MenuNavigate(SectionId),
    ToggleLanguage,
    ToggleMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(SectionId),
    SetLanguage(LanguageTag),
}

/// Process a header message and return the corresponding event.
///
/// `language` is the language currently displayed; the toggle asks for the
/// other one.
pub fn update(message: Message, menu_open: &mut bool, language: LanguageTag) -> Event {
    match message {
        Message::Navigate(section) => Event::Navigate(section),
        Message::MenuNavigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
        Message::ToggleLanguage => Event::SetLanguage(language.toggled()),
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
    }
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.layout.is_compact() && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

/// Brand on the left; inline navigation or the menu button on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(Icon::Anchor, sizing::ICON_LG).color(palette::PRIMARY_600))
        .push(
            Text::new(ctx.content.company.as_str())
                .size(typography::TITLE_MD)
                .color(palette::GRAY_900),
        );

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill));

    if ctx.layout.is_compact() {
        let glyph = if ctx.menu_open { Icon::Close } else { Icon::Menu };
        row = row.push(language_toggle(ctx.content)).push(
            button(icons::sized(glyph, sizing::ICON_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::icon),
        );
    } else {
        let nav = ctx
            .content
            .nav
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, (id, label)| {
                row.push(
                    button(Text::new(label.as_str()).size(typography::BODY_LG))
                        .on_press(Message::Navigate(*id))
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::nav_link(*id == ctx.section)),
                )
            });
        row = row.push(nav).push(language_toggle(ctx.content));
    }

    row.into()
}

fn language_toggle(content: &HeaderContent) -> Element<'_, Message> {
    button(Text::new(content.language_toggle.as_str()).size(typography::BODY))
        .on_press(Message::ToggleLanguage)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::outline)
        .into()
}

/// Build the compact dropdown listing every section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx
        .content
        .nav
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, (id, label)| {
            column.push(
                button(Text::new(label.as_str()).size(typography::BODY_LG))
                    .on_press(Message::MenuNavigate(*id))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::menu_item(*id == ctx.section)),
            )
        });

    Container::new(items)
        .padding([spacing::XS, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}
