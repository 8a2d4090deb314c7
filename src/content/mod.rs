// SPDX-License-Identifier: MPL-2.0
//! Localized content bundles.
//!
//! Each section view renders from a typed bundle (`HeroContent`,
//! `ServicesContent`, ...) rather than from raw message ids. Bundles for both
//! languages are built once at startup from the [`I18n`] registry and are
//! read-only afterwards, so a view cannot observe a half-translated page: a
//! message missing in either language fails [`Catalog::load`] instead.

mod sections;

pub use sections::{
    AboutContent, ContactContent, FieldText, FooterContent, HeaderContent, HeroContent,
    Highlight, HighlightKind, Panel, ServiceCard, ServicesContent, Stat,
};

use crate::domain::site::LanguageTag;
use crate::error::Result;
use crate::i18n::fluent::I18n;

/// Every bundle of the site for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub language: LanguageTag,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Builds all bundles of one language.
    ///
    /// `year` feeds the footer copyright line.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed message.
    pub fn load(i18n: &I18n, language: LanguageTag, year: i32) -> Result<Self> {
        Ok(Self {
            language,
            header: HeaderContent::load(i18n, language)?,
            hero: HeroContent::load(i18n, language)?,
            services: ServicesContent::load(i18n, language)?,
            about: AboutContent::load(i18n, language)?,
            contact: ContactContent::load(i18n, language)?,
            footer: FooterContent::load(i18n, language, year)?,
        })
    }

    /// All display strings of the bundle, in rendering order.
    ///
    /// Used to audit that a language renders only its own copy.
    #[must_use]
    pub fn strings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.header.collect_strings(&mut out);
        self.hero.collect_strings(&mut out);
        self.services.collect_strings(&mut out);
        self.about.collect_strings(&mut out);
        self.contact.collect_strings(&mut out);
        self.footer.collect_strings(&mut out);
        out
    }
}

/// Content for every supported language, indexed by [`LanguageTag`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    zh: SiteContent,
    en: SiteContent,
}

impl Catalog {
    /// Builds the catalog for all languages.
    ///
    /// # Errors
    ///
    /// Fails if any language lacks a message the views need.
    pub fn load(i18n: &I18n, year: i32) -> Result<Self> {
        Ok(Self {
            zh: SiteContent::load(i18n, LanguageTag::Zh, year)?,
            en: SiteContent::load(i18n, LanguageTag::En, year)?,
        })
    }

    /// Builds the catalog from the embedded translations for the current year.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Catalog::load`].
    pub fn embedded() -> Result<Self> {
        use chrono::Datelike;

        let i18n = I18n::load()?;
        Self::load(&i18n, chrono::Local::now().year())
    }

    /// Returns the bundles of a language.
    #[must_use]
    pub fn get(&self, language: LanguageTag) -> &SiteContent {
        match language {
            LanguageTag::Zh => &self.zh,
            LanguageTag::En => &self.en,
        }
    }
}
