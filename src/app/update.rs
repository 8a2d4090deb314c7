// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Section components report what they want through events; the handlers
//! here are the only code that changes the displayed language or section.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::application::port::ContactSubmitter;
use crate::domain::site::{LanguageTag, SectionId};
use crate::ui::acknowledgement::{self, Outcome};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::layout::Layout;
use crate::ui::services::{self, Event as ServicesEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub language: &'a mut LanguageTag,
    pub section: &'a mut SectionId,
    pub menu_open: &'a mut bool,
    pub layout: &'a mut Layout,
    pub contact: &'a mut contact::State,
    pub acknowledgement: &'a mut Option<Outcome>,
    pub submitter: &'a dyn ContactSubmitter,
}

/// Switches the displayed language. Section and form input are kept.
pub fn set_language(ctx: &mut UpdateContext<'_>, language: LanguageTag) {
    if *ctx.language != language {
        tracing::debug!(from = %ctx.language, to = %language, "language switched");
    }
    *ctx.language = language;
}

/// Switches the displayed section and scrolls back to the top of the page.
///
/// Leaving the contact section discards the form draft.
pub fn set_section(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    if *ctx.section == SectionId::Contact && section != SectionId::Contact {
        *ctx.contact = contact::State::default();
    }
    if *ctx.section != section {
        tracing::debug!(from = %ctx.section, to = %section, "section switched");
    }
    *ctx.section = section;

    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset::START)
}

/// Handles header messages.
pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.menu_open, *ctx.language) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::Navigate(section) => set_section(ctx, section),
        HeaderEvent::SetLanguage(language) => {
            set_language(ctx, language);
            Task::none()
        }
    }
}

/// Handles hero messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::Navigate(section) => set_section(ctx, section),
    }
}

/// Handles services messages.
pub fn handle_services_message(
    ctx: &mut UpdateContext<'_>,
    message: services::Message,
) -> Task<Message> {
    match services::update(message) {
        ServicesEvent::Navigate(section) => set_section(ctx, section),
    }
}

/// Handles contact form messages, delivering accepted drafts.
pub fn handle_contact_message(ctx: &mut UpdateContext<'_>, message: contact::Message) -> Task<Message> {
    match ctx.contact.update(message) {
        ContactEvent::None => {}
        ContactEvent::Submitted(draft) => {
            let outcome = match ctx.submitter.submit(&draft) {
                Ok(()) => Outcome::Sent,
                Err(err) => {
                    tracing::error!(error = %err, "contact form could not be delivered");
                    Outcome::Failed
                }
            };
            *ctx.acknowledgement = Some(outcome);
        }
    }
    Task::none()
}

/// Handles the acknowledgement dialog.
pub fn handle_acknowledgement_message(
    ctx: &mut UpdateContext<'_>,
    message: acknowledgement::Message,
) -> Task<Message> {
    match message {
        acknowledgement::Message::Dismiss => *ctx.acknowledgement = None,
    }
    Task::none()
}

/// Re-evaluates the layout after a window resize.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.layout = Layout::from_width(size.width);
    Task::none()
}
