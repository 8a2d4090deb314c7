// SPDX-License-Identifier: MPL-2.0
//! About section: company profile, figures, mission, vision and values.
//!
//! Purely presentational, so the view is generic over the parent's message
//! type and produces none of its own.

use crate::content::{AboutContent, Panel};
use crate::ui::components::{badge, grid::grid, stat::stat};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::Icon;
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};

/// Badges shown above the four figures, in figure order.
const STAT_ICONS: [Icon; 4] = [Icon::Award, Icon::Users, Icon::Globe, Icon::Target];

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub content: &'a AboutContent,
    pub layout: Layout,
}

/// Render the about section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = ctx.content;

    let intro = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(content.title.as_str())
                .size(typography::TITLE_LG)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(content.subtitle.as_str())
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_600),
        )
        .push(
            Text::new(content.description.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_600),
        );

    let stats: Vec<Element<'_, Message>> = content
        .stats
        .iter()
        .zip(STAT_ICONS)
        .map(|(s, icon)| {
            Column::new()
                .spacing(spacing::SM)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(badge::soft(icon))
                .push(stat(s, palette::GRAY_900, palette::GRAY_600))
                .into()
        })
        .collect();

    let statements = vec![
        panel(&content.mission),
        panel(&content.vision),
    ];

    let values_title = Text::new(content.values_title.as_str())
        .size(typography::TITLE_LG)
        .color(palette::GRAY_900)
        .width(Length::Fill)
        .align_x(Horizontal::Center);
    let values: Vec<Element<'_, Message>> = content.values.iter().map(value).collect();

    let body = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(intro)
        .push(grid(stats, ctx.layout.columns(4)))
        .push(grid(statements, ctx.layout.columns(2)))
        .push(values_title)
        .push(grid(values, ctx.layout.columns(4)))
        .push(banner(content));

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::page)
        .into()
}

fn panel<'a, Message: 'a>(panel: &'a Panel) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(panel.title.as_str())
                    .size(typography::TITLE_MD)
                    .color(palette::GRAY_900),
            )
            .push(
                Text::new(panel.body.as_str())
                    .size(typography::BODY)
                    .color(palette::GRAY_700),
            ),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn value<'a, Message: 'a>(value: &'a Panel) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(
                Text::new(value.title.as_str())
                    .size(typography::TITLE_SM)
                    .color(palette::PRIMARY_600),
            )
            .push(
                Text::new(value.body.as_str())
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_600),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::band_muted)
    .into()
}

fn banner<'a, Message: 'a>(content: &'a AboutContent) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(content.banner_title.as_str()).size(typography::TITLE_LG))
            .push(
                Text::new(content.banner_subtitle.as_str())
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_300),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BANNER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::banner)
    .into()
}
