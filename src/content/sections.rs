// SPDX-License-Identifier: MPL-2.0
//! Per-component content bundles.

use crate::domain::contact::{Field, ServiceKind};
use crate::domain::site::{LanguageTag, SectionId};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::i18n::ComponentId;
use fluent_bundle::FluentArgs;

// =============================================================================
// Shared records
// =============================================================================

/// A headline figure with its caption ("15+" / "Years Experience").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A titled block of text (mission, vision, core value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub body: String,
}

fn stat(i18n: &I18n, language: LanguageTag, component: ComponentId, key: &str) -> Result<Stat> {
    Ok(Stat {
        value: i18n.require(language, component, &format!("stat-{key}-value"))?,
        label: i18n.require(language, component, &format!("stat-{key}-label"))?,
    })
}

fn panel(i18n: &I18n, language: LanguageTag, component: ComponentId, key: &str) -> Result<Panel> {
    Ok(Panel {
        title: i18n.require(language, component, &format!("{key}-title"))?,
        body: i18n.require(language, component, &format!("{key}-body"))?,
    })
}

// =============================================================================
// Header
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContent {
    pub company: String,
    /// Navigation entries in [`SectionId::ALL`] order.
    pub nav: Vec<(SectionId, String)>,
    /// Label of the toggle; names the language it switches *to*.
    pub language_toggle: String,
}

impl HeaderContent {
    pub(super) fn load(i18n: &I18n, language: LanguageTag) -> Result<Self> {
        let c = ComponentId::Header;
        let nav = SectionId::ALL
            .into_iter()
            .map(|section| Ok((section, i18n.require(language, c, &format!("nav-{}", section.id()))?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            company: i18n.require(language, c, "company")?,
            nav,
            language_toggle: i18n.require(language, c, "language-toggle")?,
        })
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.company);
        out.extend(self.nav.iter().map(|(_, label)| label.as_str()));
        out.push(&self.language_toggle);
    }
}

// =============================================================================
// Hero
// =============================================================================

/// The three capabilities highlighted under the hero call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Structural,
    Vibration,
    Noise,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 3] = [
        HighlightKind::Structural,
        HighlightKind::Vibration,
        HighlightKind::Noise,
    ];

    fn key(self) -> &'static str {
        match self {
            HighlightKind::Structural => "structural",
            HighlightKind::Vibration => "vibration",
            HighlightKind::Noise => "noise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    pub highlights: Vec<Highlight>,
    pub stats: Vec<Stat>,
}

impl HeroContent {
    const STATS: [&'static str; 3] = ["experience", "projects", "clients"];

    pub(super) fn load(i18n: &I18n, language: LanguageTag) -> Result<Self> {
        let c = ComponentId::Hero;
        let highlights = HighlightKind::ALL
            .into_iter()
            .map(|kind| {
                Ok(Highlight {
                    kind,
                    title: i18n.require(language, c, &format!("highlight-{}-title", kind.key()))?,
                    description: i18n
                        .require(language, c, &format!("highlight-{}-description", kind.key()))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let stats = Self::STATS
            .into_iter()
            .map(|key| stat(i18n, language, c, key))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: i18n.require(language, c, "title")?,
            subtitle: i18n.require(language, c, "subtitle")?,
            description: i18n.require(language, c, "description")?,
            cta: i18n.require(language, c, "cta")?,
            highlights,
            stats,
        })
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend([&self.title, &self.subtitle, &self.description, &self.cta].map(String::as_str));
        for highlight in &self.highlights {
            out.push(&highlight.title);
            out.push(&highlight.description);
        }
        for stat in &self.stats {
            out.push(&stat.value);
            out.push(&stat.label);
        }
    }
}

// =============================================================================
// Services
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub kind: ServiceKind,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<ServiceCard>,
    pub cta_title: String,
    pub cta_body: String,
    pub cta_button: String,
}

impl ServicesContent {
    pub(super) fn load(i18n: &I18n, language: LanguageTag) -> Result<Self> {
        let c = ComponentId::Services;
        let cards = ServiceKind::ALL
            .into_iter()
            .map(|kind| {
                let key = kind.id();
                Ok(ServiceCard {
                    kind,
                    title: i18n.require(language, c, &format!("{key}-title"))?,
                    description: i18n.require(language, c, &format!("{key}-description"))?,
                    features: i18n.require_list(language, c, &format!("{key}-feature"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: i18n.require(language, c, "title")?,
            subtitle: i18n.require(language, c, "subtitle")?,
            cards,
            cta_title: i18n.require(language, c, "cta-title")?,
            cta_body: i18n.require(language, c, "cta-body")?,
            cta_button: i18n.require(language, c, "cta-button")?,
        })
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.title);
        out.push(&self.subtitle);
        for card in &self.cards {
            out.push(&card.title);
            out.push(&card.description);
            out.extend(card.features.iter().map(String::as_str));
        }
        out.extend([&self.cta_title, &self.cta_body, &self.cta_button].map(String::as_str));
    }
}

// =============================================================================
// About
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stats: Vec<Stat>,
    pub mission: Panel,
    pub vision: Panel,
    pub values_title: String,
    pub values: Vec<Panel>,
    pub banner_title: String,
    pub banner_subtitle: String,
}

impl AboutContent {
    const STATS: [&'static str; 4] = ["experience", "team", "countries", "projects"];
    const VALUES: [&'static str; 4] = ["professional", "innovation", "quality", "integrity"];

    pub(super) fn load(i18n: &I18n, language: LanguageTag) -> Result<Self> {
        let c = ComponentId::About;
        let stats = Self::STATS
            .into_iter()
            .map(|key| stat(i18n, language, c, key))
            .collect::<Result<Vec<_>>>()?;
        let values = Self::VALUES
            .into_iter()
            .map(|key| panel(i18n, language, c, &format!("value-{key}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: i18n.require(language, c, "title")?,
            subtitle: i18n.require(language, c, "subtitle")?,
            description: i18n.require(language, c, "description")?,
            stats,
            mission: panel(i18n, language, c, "mission")?,
            vision: panel(i18n, language, c, "vision")?,
            values_title: i18n.require(language, c, "values-title")?,
            values,
            banner_title: i18n.require(language, c, "banner-title")?,
            banner_subtitle: i18n.require(language, c, "banner-subtitle")?,
        })
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend([&self.title, &self.subtitle, &self.description].map(String::as_str));
        for stat in &self.stats {
            out.push(&stat.value);
            out.push(&stat.label);
        }
        for panel in [&self.mission, &self.vision] {
            out.push(&panel.title);
            out.push(&panel.body);
        }
        out.push(&self.values_title);
        for value in &self.values {
            out.push(&value.title);
            out.push(&value.body);
        }
        out.push(&self.banner_title);
        out.push(&self.banner_subtitle);
    }
}

// =============================================================================
// Contact
// =============================================================================

/// Label and placeholder of one form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub form_title: String,
    pub name: FieldText,
    pub email_field: FieldText,
    pub company: FieldText,
    pub phone_field: FieldText,
    pub service: FieldText,
    pub message: FieldText,
    /// Choices of the service select, in display order.
    pub service_options: Vec<(ServiceKind, String)>,
    pub submit: String,
    pub required_hint: String,
    pub email_hint: String,
    pub sent: String,
    pub send_failed: String,
    pub acknowledge: String,
    pub info_title: String,
    pub address_label: String,
    pub address: String,
    pub phone_label: String,
    pub phone: String,
    pub email_label: String,
    pub email: String,
    pub hours_label: String,
    pub hours: String,
    pub location_title: String,
    pub location_name: String,
}

/// Pairs the numbered service options with the services, in order.
fn service_options(labels: Vec<String>) -> Result<Vec<(ServiceKind, String)>> {
    if labels.len() != ServiceKind::ALL.len() {
        return Err(Error::I18n(format!(
            "expected {} contact service options, found {}",
            ServiceKind::ALL.len(),
            labels.len()
        )));
    }
    Ok(ServiceKind::ALL.into_iter().zip(labels).collect())
}

impl ContactContent {
    pub(super) fn load(i18n: &I18n, language: LanguageTag) -> Result<Self> {
        let c = ComponentId::Contact;
        let field_text = |field: Field| -> Result<FieldText> {
            Ok(FieldText {
                label: i18n.require(language, c, &format!("field-{}", field.name()))?,
                placeholder: i18n.require(language, c, &format!("placeholder-{}", field.name()))?,
            })
        };

        Ok(Self {
            title: i18n.require(language, c, "title")?,
            subtitle: i18n.require(language, c, "subtitle")?,
            form_title: i18n.require(language, c, "form-title")?,
            name: field_text(Field::Name)?,
            email_field: field_text(Field::Email)?,
            company: field_text(Field::Company)?,
            phone_field: field_text(Field::Phone)?,
            service: field_text(Field::Service)?,
            message: field_text(Field::Message)?,
            service_options: service_options(i18n.require_list(language, c, "service-option")?)?,
            submit: i18n.require(language, c, "submit")?,
            required_hint: i18n.require(language, c, "validation-required")?,
            email_hint: i18n.require(language, c, "validation-email")?,
            sent: i18n.require(language, c, "sent")?,
            send_failed: i18n.require(language, c, "send-failed")?,
            acknowledge: i18n.require(language, c, "acknowledge")?,
            info_title: i18n.require(language, c, "info-title")?,
            address_label: i18n.require(language, c, "address-label")?,
            address: i18n.require(language, c, "address")?,
            phone_label: i18n.require(language, c, "phone-label")?,
            phone: i18n.require(language, c, "phone")?,
            email_label: i18n.require(language, c, "email-label")?,
            email: i18n.require(language, c, "email")?,
            hours_label: i18n.require(language, c, "hours-label")?,
            hours: i18n.require(language, c, "hours")?,
            location_title: i18n.require(language, c, "location-title")?,
            location_name: i18n.require(language, c, "location-name")?,
        })
    }

    /// Localized label of a service choice.
    #[must_use]
    pub fn service_label(&self, kind: ServiceKind) -> &str {
        self.service_options
            .iter()
            .find(|(option, _)| *option == kind)
            .map_or("", |(_, label)| label.as_str())
    }

    /// Label and placeholder of a form input.
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldText {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email_field,
            Field::Company => &self.company,
            Field::Phone => &self.phone_field,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend([&self.title, &self.subtitle, &self.form_title].map(String::as_str));
        for text in Field::ALL.map(|field| self.field(field)) {
            out.push(&text.label);
            out.push(&text.placeholder);
        }
        out.extend(self.service_options.iter().map(|(_, label)| label.as_str()));
        out.extend(
            [
                &self.submit,
                &self.required_hint,
                &self.email_hint,
                &self.sent,
                &self.send_failed,
                &self.acknowledge,
                &self.info_title,
                &self.address_label,
                &self.address,
                &self.phone_label,
                &self.phone,
                &self.email_label,
                &self.email,
                &self.hours_label,
                &self.hours,
                &self.location_title,
                &self.location_name,
            ]
            .map(String::as_str),
        );
    }
}

// =============================================================================
// Footer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    pub company: String,
    pub description: String,
    pub services_title: String,
    pub services: Vec<String>,
    pub contact_title: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub copyright: String,
    pub privacy: String,
    pub terms: String,
}

impl FooterContent {
    pub(super) fn load(i18n: &I18n, language: LanguageTag, year: i32) -> Result<Self> {
        let c = ComponentId::Footer;
        let mut args = FluentArgs::new();
        args.set("year", year.to_string());

        Ok(Self {
            company: i18n.require(language, c, "company")?,
            description: i18n.require(language, c, "description")?,
            services_title: i18n.require(language, c, "services-title")?,
            services: i18n.require_list(language, c, "service")?,
            contact_title: i18n.require(language, c, "contact-title")?,
            address: i18n.require(language, c, "address")?,
            phone: i18n.require(language, c, "phone")?,
            email: i18n.require(language, c, "email")?,
            copyright: i18n.require_with_args(language, c, "copyright", &args)?,
            privacy: i18n.require(language, c, "privacy")?,
            terms: i18n.require(language, c, "terms")?,
        })
    }

    pub(super) fn collect_strings<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend([&self.company, &self.description, &self.services_title].map(String::as_str));
        out.extend(self.services.iter().map(String::as_str));
        out.extend(
            [
                &self.contact_title,
                &self.address,
                &self.phone,
                &self.email,
                &self.copyright,
                &self.privacy,
                &self.terms,
            ]
            .map(String::as_str),
        );
    }
}
