// SPDX-License-Identifier: MPL-2.0
//! Contact section: inquiry form, contact details and location card.
//!
//! The form owns its [`ContactFormDraft`]. Edits replace one field at a
//! time. Submitting runs the constraint check first; only a draft that
//! passes is handed to the parent, as a copy, and the form keeps its values.

use crate::content::ContactContent;
use crate::domain::contact::{ConstraintViolation, ContactFormDraft, Field, ServiceKind};
use crate::ui::components::{badge, heading::section_heading};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::layout::Layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, text_editor, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::fmt;

/// Form state of the contact section.
#[derive(Default)]
pub struct State {
    draft: ContactFormDraft,
    /// Editor buffer of the multi-line message; mirrored into the draft.
    message: text_editor::Content,
    /// Violation reported by the last refused submit, until the field is edited.
    invalid: Option<ConstraintViolation>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("draft", &self.draft)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FieldChanged(Field, String),
    /// Service picked from the select; `None` clears the choice.
    ServiceSelected(Option<ServiceKind>),
    /// Edit, cursor or selection action in the message editor.
    MessageEdited(text_editor::Action),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The draft passed the constraint check and should be delivered.
    Submitted(ContactFormDraft),
}

impl State {
    #[must_use]
    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    /// Violation currently flagged on the form, if any.
    #[must_use]
    pub fn invalid(&self) -> Option<ConstraintViolation> {
        self.invalid
    }

    /// Process a form message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                if field == Field::Message {
                    self.message = text_editor::Content::with_text(&value);
                }
                self.draft.set(field, value);
                self.clear_hint(field);
                Event::None
            }
            Message::ServiceSelected(service) => {
                self.draft.service = service;
                self.clear_hint(Field::Service);
                Event::None
            }
            Message::MessageEdited(action) => {
                let is_edit = action.is_edit();
                self.message.perform(action);
                if is_edit {
                    self.draft.set(Field::Message, self.message.text());
                    self.clear_hint(Field::Message);
                }
                Event::None
            }
            Message::Submit => match self.draft.check_constraints() {
                Ok(()) => {
                    self.invalid = None;
                    Event::Submitted(self.draft.clone())
                }
                Err(violation) => {
                    tracing::debug!(%violation, "contact form refused to submit");
                    self.invalid = Some(violation);
                    Event::None
                }
            },
        }
    }

    fn clear_hint(&mut self, field: Field) {
        if self.invalid.is_some_and(|violation| violation.field() == field) {
            self.invalid = None;
        }
    }
}

/// Entry of the service select. The entry without a service clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServiceChoice<'a> {
    kind: Option<ServiceKind>,
    label: &'a str,
}

impl fmt::Display for ServiceChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Select entries in display order, led by the clearing entry.
fn service_choices(content: &ContactContent) -> Vec<ServiceChoice<'_>> {
    let clear = ServiceChoice {
        kind: None,
        label: content.field(Field::Service).placeholder.as_str(),
    };
    std::iter::once(clear)
        .chain(content.service_options.iter().map(|(kind, label)| ServiceChoice {
            kind: Some(*kind),
            label: label.as_str(),
        }))
        .collect()
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub content: &'a ContactContent,
    pub state: &'a State,
    pub layout: Layout,
}

/// Render the contact section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx.content;
    let form = build_form(&ctx);
    let details = Column::new()
        .spacing(spacing::LG)
        .push(build_info(content))
        .push(build_location(content));

    let columns: Element<'_, Message> = if ctx.layout.is_compact() {
        Column::new()
            .spacing(spacing::XL)
            .push(form)
            .push(details)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(form).width(Length::FillPortion(3)))
            .push(Container::new(details).width(Length::FillPortion(2)))
            .into()
    };

    let body = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(section_heading(&content.title, &content.subtitle))
        .push(columns);

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::band_muted)
        .into()
}

fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = ctx.content;
    let draft = ctx.state.draft();

    let pair = |left: Field, right: Field| -> Element<'a, Message> {
        if ctx.layout.is_compact() {
            Column::new()
                .spacing(spacing::MD)
                .push(input(ctx, left))
                .push(input(ctx, right))
                .into()
        } else {
            Row::new()
                .spacing(spacing::MD)
                .push(Container::new(input(ctx, left)).width(Length::FillPortion(1)))
                .push(Container::new(input(ctx, right)).width(Length::FillPortion(1)))
                .into()
        }
    };

    let selected = draft.service.map(|kind| ServiceChoice {
        kind: Some(kind),
        label: content.service_label(kind),
    });
    let service_text = content.field(Field::Service);
    let service = labeled(
        ctx,
        Field::Service,
        pick_list(service_choices(content), selected, |choice: ServiceChoice<'_>| {
            Message::ServiceSelected(choice.kind)
        })
        .placeholder(service_text.placeholder.as_str())
        .padding(spacing::SM)
        .width(Length::Fill)
        .into(),
    );

    let submit = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(Icon::Send, sizing::ICON_SM))
            .push(Text::new(content.submit.as_str()).size(typography::BODY_LG)),
    )
    .on_press(Message::Submit)
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(content.form_title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::GRAY_900),
        )
        .push(pair(Field::Name, Field::Email))
        .push(pair(Field::Company, Field::Phone))
        .push(service)
        .push(message_editor(ctx))
        .push(submit);

    Container::new(form)
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Label, text input and validation hint of a single-line field.
fn input<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let text = ctx.content.field(field);
    let invalid = ctx.state.invalid().is_some_and(|v| v.field() == field);

    let widget = text_input(text.placeholder.as_str(), ctx.state.draft().get(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::field(invalid));

    labeled(ctx, field, widget.into())
}

/// Multi-line message input; Enter starts a new line.
fn message_editor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let text = ctx.content.field(Field::Message);
    let invalid = ctx
        .state
        .invalid()
        .is_some_and(|v| v.field() == Field::Message);

    let state: &'a State = ctx.state;
    let widget = text_editor(&state.message)
        .placeholder(text.placeholder.as_str())
        .on_action(Message::MessageEdited)
        .height(Length::Fixed(sizing::MESSAGE_INPUT_HEIGHT))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::editor(invalid));

    labeled(ctx, Field::Message, widget.into())
}

/// Wraps a form control with its label and, when flagged, the hint.
fn labeled<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let text = ctx.content.field(field);
    let label = if field.is_required() {
        format!("{} *", text.label)
    } else {
        text.label.clone()
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM).color(palette::GRAY_700))
        .push(control);

    if let Some(violation) = ctx.state.invalid().filter(|v| v.field() == field) {
        let hint = match violation {
            ConstraintViolation::Missing(_) => ctx.content.required_hint.as_str(),
            ConstraintViolation::InvalidEmail => ctx.content.email_hint.as_str(),
        };
        column = column.push(
            Text::new(hint)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

fn build_info(content: &ContactContent) -> Element<'_, Message> {
    let rows = [
        (Icon::MapPin, &content.address_label, &content.address),
        (Icon::Phone, &content.phone_label, &content.phone),
        (Icon::Mail, &content.email_label, &content.email),
        (Icon::Clock, &content.hours_label, &content.hours),
    ];

    let info = rows.into_iter().fold(
        Column::new().spacing(spacing::LG).push(
            Text::new(content.info_title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::GRAY_900),
        ),
        |column, (icon, label, value)| {
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Top)
                    .push(badge::solid(icon))
                    .push(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(
                                Text::new(label.as_str())
                                    .size(typography::BODY)
                                    .color(palette::GRAY_900),
                            )
                            .push(
                                Text::new(value.as_str())
                                    .size(typography::BODY)
                                    .color(palette::GRAY_600),
                            ),
                    ),
            )
        },
    );

    Container::new(info)
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn build_location(content: &ContactContent) -> Element<'_, Message> {
    let map = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icons::sized(Icon::MapPin, sizing::ICON_XL))
            .push(Text::new(content.location_name.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::MAP_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::map);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(content.location_title.as_str())
                    .size(typography::TITLE_MD)
                    .color(palette::GRAY_900),
            )
            .push(map),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::domain::site::LanguageTag;

    fn filled() -> State {
        let mut state = State::default();
        state.update(Message::FieldChanged(Field::Name, "Li Wei".into()));
        state.update(Message::FieldChanged(Field::Email, "li.wei@example.com".into()));
        state.update(Message::FieldChanged(Field::Message, "Hull survey".into()));
        state
    }

    #[test]
    fn edits_touch_only_their_field() {
        let mut state = filled();
        let before = state.draft().clone();

        state.update(Message::FieldChanged(Field::Phone, "+86 21 0000 0000".into()));

        for field in Field::ALL {
            if field == Field::Phone {
                assert_eq!(state.draft().get(field), "+86 21 0000 0000");
            } else {
                assert_eq!(state.draft().get(field), before.get(field));
            }
        }
    }

    #[test]
    fn last_write_wins() {
        let mut state = State::default();
        state.update(Message::FieldChanged(Field::Company, "A".into()));
        state.update(Message::FieldChanged(Field::Company, "B".into()));
        assert_eq!(state.draft().company, "B");
    }

    #[test]
    fn service_selection_can_be_cleared() {
        let mut state = State::default();
        state.update(Message::ServiceSelected(Some(ServiceKind::Dynamic)));
        assert_eq!(state.draft().service, Some(ServiceKind::Dynamic));

        state.update(Message::ServiceSelected(None));
        assert_eq!(state.draft().service, None);
    }

    #[test]
    fn service_choices_start_with_the_clearing_entry() {
        let catalog = Catalog::embedded().unwrap();
        let content = &catalog.get(LanguageTag::En).contact;
        let choices = service_choices(content);

        assert_eq!(choices.len(), ServiceKind::ALL.len() + 1);
        assert_eq!(choices[0].kind, None);
        assert_eq!(choices[0].to_string(), content.field(Field::Service).placeholder);
        let kinds: Vec<ServiceKind> = choices[1..].iter().filter_map(|c| c.kind).collect();
        assert_eq!(kinds, ServiceKind::ALL.to_vec());
    }

    #[test]
    fn chosen_service_survives_a_language_switch() {
        let catalog = Catalog::embedded().unwrap();
        let mut state = State::default();
        state.update(Message::ServiceSelected(Some(ServiceKind::Fatigue)));

        for language in LanguageTag::ALL {
            let content = &catalog.get(language).contact;
            let label = content.service_label(state.draft().service.unwrap());
            assert!(service_choices(content).iter().any(|c| c.label == label));
        }
        assert_eq!(state.draft().service, Some(ServiceKind::Fatigue));
    }

    #[test]
    fn enter_in_the_message_starts_a_new_line() {
        let mut state = filled();
        state.update(Message::FieldChanged(Field::Message, String::new()));

        for action in [
            text_editor::Action::Edit(text_editor::Edit::Insert('a')),
            text_editor::Action::Edit(text_editor::Edit::Enter),
            text_editor::Action::Edit(text_editor::Edit::Insert('b')),
        ] {
            assert_eq!(state.update(Message::MessageEdited(action)), Event::None);
        }

        assert!(state.draft().message.contains('\n'));
        let lines: Vec<&str> = state.draft().message.lines().collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn pasted_line_breaks_are_kept() {
        let mut state = State::default();
        let pasted = "Hull survey\nTwo vessels";

        let event = state.update(Message::MessageEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new(pasted.to_string())),
        )));

        assert_eq!(event, Event::None);
        let lines: Vec<&str> = state.draft().message.lines().collect();
        assert_eq!(lines, vec!["Hull survey", "Two vessels"]);
    }

    #[test]
    fn message_set_directly_keeps_line_breaks() {
        let mut state = State::default();
        state.update(Message::FieldChanged(Field::Message, "one\ntwo".into()));
        assert_eq!(state.draft().message, "one\ntwo");
    }

    #[test]
    fn cursor_moves_do_not_touch_the_draft() {
        let mut state = filled();
        let before = state.draft().clone();
        state.update(Message::MessageEdited(text_editor::Action::Move(
            text_editor::Motion::Home,
        )));
        assert_eq!(state.draft(), &before);
    }

    #[test]
    fn valid_submit_emits_copy_and_keeps_draft() {
        let mut state = filled();
        let before = state.draft().clone();

        let event = state.update(Message::Submit);

        assert_eq!(event, Event::Submitted(before.clone()));
        assert_eq!(state.draft(), &before);
        assert_eq!(state.invalid(), None);
    }

    #[test]
    fn resubmitting_is_allowed() {
        let mut state = filled();
        assert!(matches!(state.update(Message::Submit), Event::Submitted(_)));
        assert!(matches!(state.update(Message::Submit), Event::Submitted(_)));
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut state = filled();
        state.update(Message::FieldChanged(Field::Name, String::new()));

        let event = state.update(Message::Submit);

        assert_eq!(event, Event::None);
        assert_eq!(state.invalid(), Some(ConstraintViolation::Missing(Field::Name)));
    }

    #[test]
    fn malformed_email_blocks_submit() {
        let mut state = filled();
        state.update(Message::FieldChanged(Field::Email, "not-an-email".into()));

        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.invalid(), Some(ConstraintViolation::InvalidEmail));
    }

    #[test]
    fn editing_the_flagged_field_clears_the_hint() {
        let mut state = State::default();
        state.update(Message::Submit);
        assert_eq!(state.invalid(), Some(ConstraintViolation::Missing(Field::Name)));

        state.update(Message::FieldChanged(Field::Phone, "1".into()));
        assert!(state.invalid().is_some());

        state.update(Message::FieldChanged(Field::Name, "Li".into()));
        assert_eq!(state.invalid(), None);
    }

    #[test]
    fn contact_view_renders_with_and_without_hint() {
        let catalog = Catalog::embedded().unwrap();
        let mut state = State::default();
        for layout in [Layout::Wide, Layout::Compact] {
            let _element = view(ViewContext {
                content: &catalog.get(LanguageTag::En).contact,
                state: &state,
                layout,
            });
        }

        state.update(Message::Submit);
        let _element = view(ViewContext {
            content: &catalog.get(LanguageTag::Zh).contact,
            state: &state,
            layout: Layout::Wide,
        });
    }
}
