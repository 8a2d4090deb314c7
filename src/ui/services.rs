// SPDX-License-Identifier: MPL-2.0
//! Services section: six service cards and a closing call-to-action band.

use crate::content::{ServiceCard, ServicesContent};
use crate::domain::contact::ServiceKind;
use crate::domain::site::SectionId;
use crate::ui::components::{grid::grid, heading::section_heading};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Background, Border, Color, Element, Length, Theme,
};

/// Contextual data needed to render the services section.
pub struct ViewContext<'a> {
    pub content: &'a ServicesContent,
    pub layout: Layout,
}

/// Messages emitted by the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ContactNow,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(SectionId),
}

/// Process a services message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ContactNow => Event::Navigate(SectionId::Contact),
    }
}

/// Icon and accent color of a service card.
fn appearance(kind: ServiceKind) -> (Icon, Color) {
    match kind {
        ServiceKind::Structural => (Icon::Ship, palette::PRIMARY_600),
        ServiceKind::Vibration => (Icon::Activity, palette::GREEN_600),
        ServiceKind::Noise => (Icon::Volume, palette::PURPLE_600),
        ServiceKind::Dynamic => (Icon::Waves, palette::CYAN_600),
        ServiceKind::Fatigue => (Icon::Chart, palette::ORANGE_600),
        ServiceKind::Safety => (Icon::Shield, palette::RED_600),
    }
}

/// Render the services section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx.content;
    let cards: Vec<Element<'_, Message>> = content.cards.iter().map(card).collect();

    let body = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_heading(&content.title, &content.subtitle))
        .push(grid(cards, ctx.layout.columns(3)))
        .push(call_to_action(content));

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::band_muted)
        .into()
}

fn card(card: &ServiceCard) -> Element<'_, Message> {
    let (icon, accent) = appearance(card.kind);

    let badge = Container::new(icons::sized(icon, sizing::ICON_LG).color(palette::WHITE))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let features = card.features.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, feature| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(Icon::Check, sizing::ICON_SM).color(accent))
                    .push(
                        Text::new(feature.as_str())
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_700),
                    ),
            )
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(badge)
            .push(
                Text::new(card.title.as_str())
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_900),
            )
            .push(
                Text::new(card.description.as_str())
                    .size(typography::BODY)
                    .color(palette::GRAY_600),
            )
            .push(features),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn call_to_action(content: &ServicesContent) -> Element<'_, Message> {
    let band = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(content.cta_title.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(content.cta_body.as_str())
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_100),
        )
        .push(
            button(Text::new(content.cta_button.as_str()).size(typography::BODY_LG))
                .on_press(Message::ContactNow)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::inverted),
        );

    Container::new(band)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .style(styles::container::cta_band)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::domain::site::LanguageTag;

    #[test]
    fn contact_now_navigates_to_contact() {
        assert_eq!(update(Message::ContactNow), Event::Navigate(SectionId::Contact));
    }

    #[test]
    fn services_view_renders() {
        let catalog = Catalog::embedded().unwrap();
        for layout in [Layout::Wide, Layout::Compact] {
            let _element = view(ViewContext {
                content: &catalog.get(LanguageTag::Zh).services,
                layout,
            });
        }
    }

    #[test]
    fn every_service_has_a_distinct_icon() {
        let icons: Vec<Icon> = ServiceKind::ALL
            .into_iter()
            .map(|kind| appearance(kind).0)
            .collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon), "{icon:?} is used twice");
        }
    }
}
