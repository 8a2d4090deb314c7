// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, call-to-action, capability highlights and stats.

use crate::content::{HeroContent, HighlightKind};
use crate::domain::site::SectionId;
use crate::ui::components::{grid::grid, stat::stat};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub content: &'a HeroContent,
    pub layout: Layout,
}

/// Messages emitted by the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ExploreServices,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(SectionId),
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ExploreServices => Event::Navigate(SectionId::Services),
    }
}

fn highlight_icon(kind: HighlightKind) -> Icon {
    match kind {
        HighlightKind::Structural => Icon::Ship,
        HighlightKind::Vibration => Icon::Activity,
        HighlightKind::Noise => Icon::Volume,
    }
}

/// Render the hero section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx.content;

    let cta = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(content.cta.as_str()).size(typography::BODY_LG))
            .push(icons::sized(Icon::ArrowRight, sizing::ICON_SM)),
    )
    .on_press(Message::ExploreServices)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary);

    let headline = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(content.title.as_str()).size(typography::DISPLAY))
        .push(
            Text::new(content.subtitle.as_str())
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_300),
        )
        .push(
            Text::new(content.description.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_300),
        )
        .push(cta);

    let highlights: Vec<Element<'_, Message>> = content
        .highlights
        .iter()
        .map(|highlight| {
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(
                        icons::sized(highlight_icon(highlight.kind), sizing::ICON_XL)
                            .color(palette::PRIMARY_300),
                    )
                    .push(Text::new(highlight.title.as_str()).size(typography::TITLE_SM))
                    .push(
                        Text::new(highlight.description.as_str())
                            .size(typography::BODY)
                            .color(palette::GRAY_300),
                    ),
            )
            .padding(spacing::LG)
            .style(styles::container::glass)
            .into()
        })
        .collect();

    let stats: Vec<Element<'_, Message>> = content
        .stats
        .iter()
        .map(|s| stat(s, palette::PRIMARY_400, palette::GRAY_300))
        .collect();

    let columns = ctx.layout.columns(3);
    let body = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(headline)
        .push(grid(highlights, columns))
        .push(grid(stats, columns));

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::domain::site::LanguageTag;

    #[test]
    fn call_to_action_navigates_to_services() {
        assert_eq!(
            update(Message::ExploreServices),
            Event::Navigate(SectionId::Services)
        );
    }

    #[test]
    fn hero_view_renders() {
        let catalog = Catalog::embedded().unwrap();
        for layout in [Layout::Wide, Layout::Compact] {
            let _element = view(ViewContext {
                content: &catalog.get(LanguageTag::En).hero,
                layout,
            });
        }
    }

    #[test]
    fn every_highlight_has_its_own_icon() {
        let icons: Vec<Icon> = HighlightKind::ALL.into_iter().map(highlight_icon).collect();
        assert_eq!(icons, vec![Icon::Ship, Icon::Activity, Icon::Volume]);
    }
}
