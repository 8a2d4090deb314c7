// SPDX-License-Identifier: MPL-2.0
//! Contact form draft and its submission constraints.
//!
//! The draft is transient user input: it is never persisted and the
//! application drops it when the contact section is left. Constraint checks
//! mirror what an HTML form with `required` and `type="email"` inputs enforces
//! before its submit handler runs; nothing stricter is imposed.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

// =============================================================================
// Field
// =============================================================================

/// One input of the contact form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Message,
}

impl Field {
    /// All fields in form order. Constraint checks report the first
    /// offending field in this order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    /// Payload key of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    /// Whether the form refuses to submit while this field is empty.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

// =============================================================================
// ServiceKind
// =============================================================================

/// Services offered, in the order they are listed on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Structural,
    Vibration,
    Noise,
    Dynamic,
    Fatigue,
    Safety,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Structural,
        ServiceKind::Vibration,
        ServiceKind::Noise,
        ServiceKind::Dynamic,
        ServiceKind::Fatigue,
        ServiceKind::Safety,
    ];

    /// Language-independent identifier, used in message ids and payloads.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::Structural => "structural",
            ServiceKind::Vibration => "vibration",
            ServiceKind::Noise => "noise",
            ServiceKind::Dynamic => "dynamic",
            ServiceKind::Fatigue => "fatigue",
            ServiceKind::Safety => "safety",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

// =============================================================================
// ConstraintViolation
// =============================================================================

/// Reason the form refused to invoke its submit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A required field is empty.
    Missing(Field),
    /// The email field is filled but is not an email address.
    InvalidEmail,
}

impl ConstraintViolation {
    /// Field the violation is reported on.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            ConstraintViolation::Missing(field) => field,
            ConstraintViolation::InvalidEmail => Field::Email,
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Missing(field) => {
                write!(f, "required field '{}' is empty", field.name())
            }
            ConstraintViolation::InvalidEmail => write!(f, "email address is malformed"),
        }
    }
}

// =============================================================================
// ContactFormDraft
// =============================================================================

/// Free-text input collected by the contact form.
///
/// This is also the payload shape handed to a submission endpoint: six named
/// string fields, empty when the user left them blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    /// Requested service; `None` until one is picked or after clearing.
    pub service: Option<ServiceKind>,
    pub message: String,
}

impl ContactFormDraft {
    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Service => self.service.map_or("", ServiceKind::id),
            Field::Message => &self.message,
        }
    }

    /// Replaces a single field. Other fields are left untouched.
    ///
    /// The email value is stripped of surrounding whitespace, as browsers do
    /// for `type="email"` inputs. The service field takes a
    /// [`ServiceKind::id`]; anything else clears it.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => {
                self.email = value.trim().to_string();
                return;
            }
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Service => {
                self.service = ServiceKind::from_id(&value);
                return;
            }
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Returns `true` if no field has been filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Checks the constraints a browser enforces before submitting.
    ///
    /// Fields are visited in form order and the first violation wins.
    pub fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        for field in Field::ALL {
            let value = self.get(field);
            if field == Field::Email {
                // Email inputs strip surrounding whitespace before validation.
                let email = value.trim();
                if email.is_empty() {
                    return Err(ConstraintViolation::Missing(field));
                }
                if !is_valid_email(email) {
                    return Err(ConstraintViolation::InvalidEmail);
                }
            } else if field.is_required() && value.is_empty() {
                return Err(ConstraintViolation::Missing(field));
            }
        }
        Ok(())
    }
}

/// Matches the "valid e-mail address" production of the HTML standard.
fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .expect("email pattern is a valid regex")
        })
        .is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ContactFormDraft {
        ContactFormDraft {
            name: "Li Wei".to_string(),
            email: "li.wei@example.com".to_string(),
            company: String::new(),
            phone: String::new(),
            service: None,
            message: "Hull vibration survey".to_string(),
        }
    }

    #[test]
    fn new_draft_is_empty() {
        assert!(ContactFormDraft::default().is_empty());
    }

    #[test]
    fn set_updates_only_the_given_field() {
        let mut draft = complete_draft();
        let before = draft.clone();

        draft.set(Field::Phone, "+86 21 5555 0000".to_string());

        assert_eq!(draft.phone, "+86 21 5555 0000");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Phone) {
            assert_eq!(draft.get(field), before.get(field), "{field:?} changed");
        }
    }

    #[test]
    fn set_is_last_write_wins() {
        let mut draft = ContactFormDraft::default();
        draft.set(Field::Name, "L".to_string());
        draft.set(Field::Name, "Li".to_string());
        assert_eq!(draft.name, "Li");
    }

    #[test]
    fn required_fields_are_name_email_message() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(complete_draft().check_constraints(), Ok(()));
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let draft = complete_draft();
        assert!(draft.company.is_empty() && draft.phone.is_empty() && draft.service.is_none());
        assert!(draft.check_constraints().is_ok());
    }

    #[test]
    fn first_missing_field_in_form_order_is_reported() {
        let draft = ContactFormDraft::default();
        assert_eq!(
            draft.check_constraints(),
            Err(ConstraintViolation::Missing(Field::Name))
        );

        let mut draft = complete_draft();
        draft.message.clear();
        assert_eq!(
            draft.check_constraints(),
            Err(ConstraintViolation::Missing(Field::Message))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut draft = complete_draft();
        draft.email = "not-an-address".to_string();
        assert_eq!(
            draft.check_constraints(),
            Err(ConstraintViolation::InvalidEmail)
        );
        assert_eq!(ConstraintViolation::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn email_whitespace_is_ignored() {
        let mut draft = complete_draft();
        draft.email = "  li.wei@example.com ".to_string();
        assert!(draft.check_constraints().is_ok());

        draft.email = "   ".to_string();
        assert_eq!(
            draft.check_constraints(),
            Err(ConstraintViolation::Missing(Field::Email))
        );
    }

    #[test]
    fn email_grammar_matches_html_rules() {
        assert!(is_valid_email("info@carnelli-marine.com"));
        assert!(is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@-marine.com"));
        assert!(!is_valid_email("a b@marine.com"));
        assert!(!is_valid_email("@marine.com"));
    }

    #[test]
    fn set_strips_whitespace_around_email() {
        let mut draft = complete_draft();
        draft.set(Field::Email, "  li.wei@example.com \n".to_string());
        assert_eq!(draft.email, "li.wei@example.com");
        assert!(draft.check_constraints().is_ok());
    }

    #[test]
    fn set_keeps_message_line_breaks() {
        let mut draft = complete_draft();
        draft.set(Field::Message, "line one\nline two\n".to_string());
        assert_eq!(draft.message, "line one\nline two\n");
    }

    #[test]
    fn service_is_stored_by_identifier() {
        let mut draft = complete_draft();
        draft.set(Field::Service, "fatigue".to_string());
        assert_eq!(draft.service, Some(ServiceKind::Fatigue));
        assert_eq!(draft.get(Field::Service), "fatigue");

        draft.set(Field::Service, String::new());
        assert_eq!(draft.service, None);
        assert_eq!(draft.get(Field::Service), "");
    }

    #[test]
    fn service_identifiers_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ServiceKind::from_id("welding"), None);
    }
}
