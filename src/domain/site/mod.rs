// SPDX-License-Identifier: MPL-2.0
//! Site navigation value objects.
//!
//! [`LanguageTag`] and [`SectionId`] are the two pieces of interaction state
//! owned by the application root. Both are plain `Copy` enums so they can be
//! handed to every view by value.

use std::fmt;

// =============================================================================
// LanguageTag
// =============================================================================

/// Active display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageTag {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

impl LanguageTag {
    /// All supported languages, in toggle order.
    pub const ALL: [LanguageTag; 2] = [LanguageTag::Zh, LanguageTag::En];

    /// Returns the other language. The header toggle is binary, not a selector.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LanguageTag::Zh => LanguageTag::En,
            LanguageTag::En => LanguageTag::Zh,
        }
    }

    /// Short tag used for file names and configuration values.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LanguageTag::Zh => "zh",
            LanguageTag::En => "en",
        }
    }

    /// Parses a language tag, accepting region suffixes (`zh-CN`, `en_US`).
    ///
    /// Returns `None` for languages the site has no copy for.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" => Some(LanguageTag::Zh),
            "en" => Some(LanguageTag::En),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// SectionId
// =============================================================================

/// Top-level page region selected through the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    /// Composite landing page.
    #[default]
    Home,
    Services,
    About,
    Contact,
}

/// A section view that can appear in the switched region of the page.
///
/// Header and footer are rendered around the switched region and are not
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Hero,
    Services,
    About,
    Contact,
}

impl SectionId {
    /// Navigation entries in display order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Identifier used in navigation, configuration and the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    /// Strict lookup: `None` when the identifier names no section.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "home" => Some(SectionId::Home),
            "services" => Some(SectionId::Services),
            "about" => Some(SectionId::About),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    /// Lenient lookup used for external input.
    ///
    /// Unrecognised identifiers select the home composite instead of failing.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        match Self::from_id(id) {
            Some(section) => section,
            None => SectionId::Home,
        }
    }

    /// Views rendered for this section, top to bottom.
    #[must_use]
    pub fn visible_views(self) -> &'static [View] {
        match self {
            SectionId::Home => &[View::Hero, View::Services, View::About],
            SectionId::Services => &[View::Services],
            SectionId::About => &[View::About],
            SectionId::Contact => &[View::Contact],
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_chinese() {
        assert_eq!(LanguageTag::default(), LanguageTag::Zh);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for tag in LanguageTag::ALL {
            assert_ne!(tag.toggled(), tag);
            assert_eq!(tag.toggled().toggled(), tag);
        }
    }

    #[test]
    fn language_parsing_accepts_region_suffixes() {
        assert_eq!(LanguageTag::from_code("zh"), Some(LanguageTag::Zh));
        assert_eq!(LanguageTag::from_code("zh-CN"), Some(LanguageTag::Zh));
        assert_eq!(LanguageTag::from_code("EN_us"), Some(LanguageTag::En));
        assert_eq!(LanguageTag::from_code("fr"), None);
        assert_eq!(LanguageTag::from_code(""), None);
    }

    #[test]
    fn section_defaults_to_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn section_ids_round_trip_through_strict_lookup() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_section_resolves_to_home() {
        assert_eq!(SectionId::from_id("careers"), None);
        assert_eq!(SectionId::resolve("careers"), SectionId::Home);
        assert_eq!(SectionId::resolve(""), SectionId::Home);
        assert_eq!(SectionId::resolve(" Contact "), SectionId::Contact);
    }

    #[test]
    fn home_composes_hero_services_about_in_order() {
        assert_eq!(
            SectionId::Home.visible_views(),
            &[View::Hero, View::Services, View::About]
        );
    }

    #[test]
    fn other_sections_render_exactly_one_view() {
        assert_eq!(SectionId::Services.visible_views(), &[View::Services]);
        assert_eq!(SectionId::About.visible_views(), &[View::About]);
        assert_eq!(SectionId::Contact.visible_views(), &[View::Contact]);
    }
}
