// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! All display strings live in one Fluent resource per language under
//! `assets/i18n/`, embedded at compile time. The [`fluent::I18n`] registry
//! loads them once at startup and answers lookups keyed by
//! `(ComponentId, LanguageTag)`.
//!
//! # Key Layout
//!
//! - Message ids are namespaced by component: `<component>-<field>`
//! - Ordered lists use numbered ids: `<component>-<field>-1`, `-2`, ...
//! - Both languages must define the same ids; a gap is a startup error

pub mod fluent;

/// Component namespace of a message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Header,
    Hero,
    Services,
    About,
    Contact,
    Footer,
}

impl ComponentId {
    /// Message id prefix owned by the component.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            ComponentId::Header => "header",
            ComponentId::Hero => "hero",
            ComponentId::Services => "services",
            ComponentId::About => "about",
            ComponentId::Contact => "contact",
            ComponentId::Footer => "footer",
        }
    }

    /// Full message id for a field of this component.
    #[must_use]
    pub fn key(self, field: &str) -> String {
        format!("{}-{}", self.prefix(), field)
    }
}
