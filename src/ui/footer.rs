// SPDX-License-Identifier: MPL-2.0
//! Site footer: company blurb, service list, contact details, legal row.

use crate::content::FooterContent;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub content: &'a FooterContent,
    pub layout: Layout,
}

/// Render the footer.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a + Clone>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = ctx.content;

    let company = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::sized(Icon::Anchor, sizing::ICON_LG).color(palette::PRIMARY_400))
                .push(
                    Text::new(content.company.as_str())
                        .size(typography::TITLE_MD)
                        .color(palette::WHITE),
                ),
        )
        .push(
            Text::new(content.description.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_300),
        );

    let services = content.services.iter().fold(
        Column::new().spacing(spacing::XS).push(heading(&content.services_title)),
        |column, service| {
            column.push(
                Text::new(service.as_str())
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            )
        },
    );

    let contact = Column::new()
        .spacing(spacing::SM)
        .push(heading(&content.contact_title))
        .push(contact_line(Icon::MapPin, &content.address))
        .push(contact_line(Icon::Phone, &content.phone))
        .push(contact_line(Icon::Mail, &content.email));

    let columns: Element<'a, Message> = if ctx.layout.is_compact() {
        Column::new()
            .spacing(spacing::XL)
            .push(company)
            .push(services)
            .push(contact)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(company).width(Length::FillPortion(2)))
            .push(Container::new(services).width(Length::FillPortion(1)))
            .push(Container::new(contact).width(Length::FillPortion(1)))
            .into()
    };

    let legal = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(
            Container::new(
                Text::new(content.copyright.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill),
        )
        .push(legal_link(&content.privacy))
        .push(legal_link(&content.terms));

    let divider = Container::new(Row::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider);

    let body = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(columns)
        .push(divider)
        .push(legal);

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::footer)
        .into()
}

fn heading<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_SM)
        .color(palette::WHITE)
        .into()
}

fn contact_line<'a, Message: 'a>(icon: Icon, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM).color(palette::PRIMARY_400))
        .push(
            Text::new(value)
                .size(typography::BODY)
                .color(palette::GRAY_300),
        )
        .into()
}

/// Legal entries have no destination; they render as inert links.
fn legal_link<'a, Message: 'a + Clone>(label: &'a str) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .padding(0)
        .style(styles::button::footer_link)
        .into()
}
