// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the header, the views of the active section, and the footer.
//! Everything below the header scrolls.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::content::SiteContent;
use crate::domain::site::{SectionId, View};
use crate::ui::acknowledgement::{self, Outcome};
use crate::ui::layout::Layout;
use crate::ui::{about, contact, footer, header, hero, services, styles};
use iced::{
    widget::{scrollable, Column, Container, Id},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub section: SectionId,
    pub menu_open: bool,
    pub layout: Layout,
    pub contact: &'a contact::State,
    pub acknowledgement: Option<Outcome>,
}

/// Renders the page for the active section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        content: &ctx.content.header,
        section: ctx.section,
        menu_open: ctx.menu_open,
        layout: ctx.layout,
    })
    .map(Message::Header);

    let page = ctx
        .section
        .visible_views()
        .iter()
        .fold(Column::new().width(Length::Fill), |column, view| {
            column.push(view_section(&ctx, *view))
        })
        .push(footer::view(footer::ViewContext {
            content: &ctx.content.footer,
            layout: ctx.layout,
        }));

    let body = Column::new()
        .push(header)
        .push(
            scrollable(page)
                .id(Id::new(PAGE_SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let base: Element<'_, Message> = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into();

    match ctx.acknowledgement {
        Some(outcome) => acknowledgement::view(
            base,
            &ctx.content.contact,
            outcome,
            Message::Acknowledgement,
        ),
        None => base,
    }
}

fn view_section<'a>(ctx: &ViewContext<'a>, view: View) -> Element<'a, Message> {
    match view {
        View::Hero => hero::view(hero::ViewContext {
            content: &ctx.content.hero,
            layout: ctx.layout,
        })
        .map(Message::Hero),
        View::Services => services::view(services::ViewContext {
            content: &ctx.content.services,
            layout: ctx.layout,
        })
        .map(Message::Services),
        View::About => about::view(about::ViewContext {
            content: &ctx.content.about,
            layout: ctx.layout,
        }),
        View::Contact => contact::view(contact::ViewContext {
            content: &ctx.content.contact,
            state: ctx.contact,
            layout: ctx.layout,
        })
        .map(Message::Contact),
    }
}
