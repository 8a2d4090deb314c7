// SPDX-License-Identifier: MPL-2.0
use super::ComponentId;
use crate::domain::site::LanguageTag;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Process-wide, read-only localization registry.
pub struct I18n {
    bundles: HashMap<LanguageTag, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    /// Loads the translations embedded in the binary.
    ///
    /// # Errors
    ///
    /// Fails if a resource does not parse or a supported language has no
    /// resource at all.
    pub fn load() -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Some(language) = LanguageTag::from_code(stem) else {
                tracing::warn!(file = filename, "ignoring translations for unsupported language");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8(content.data.into_owned())
                    .map_err(|e| Error::I18n(format!("{filename}: {e}")))?;
                sources.push((language, source));
            }
        }

        Self::from_sources(sources)
    }

    /// Builds the registry from in-memory Fluent sources.
    ///
    /// # Errors
    ///
    /// Same conditions as [`I18n::load`].
    pub fn from_sources(sources: impl IntoIterator<Item = (LanguageTag, String)>) -> Result<Self> {
        let mut bundles = HashMap::new();
        for (language, source) in sources {
            bundles.insert(language, build_bundle(language, source)?);
        }

        for language in LanguageTag::ALL {
            if !bundles.contains_key(&language) {
                return Err(Error::I18n(format!("no translations for '{language}'")));
            }
        }

        Ok(Self { bundles })
    }

    /// Looks up a component field, returning `None` when it is not defined.
    #[must_use]
    pub fn message(&self, language: LanguageTag, component: ComponentId, field: &str) -> Option<String> {
        self.format(language, &component.key(field), None).ok()
    }

    /// Looks up a component field that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] naming the missing message id.
    pub fn require(&self, language: LanguageTag, component: ComponentId, field: &str) -> Result<String> {
        self.format(language, &component.key(field), None)
    }

    /// Looks up a component field with Fluent arguments (`{ $name }`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] if the message is missing or fails to format.
    pub fn require_with_args(
        &self,
        language: LanguageTag,
        component: ComponentId,
        field: &str,
        args: &FluentArgs<'_>,
    ) -> Result<String> {
        self.format(language, &component.key(field), Some(args))
    }

    /// Collects the numbered messages `<field>-1`, `<field>-2`, ... in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] if not even `<field>-1` exists.
    pub fn require_list(
        &self,
        language: LanguageTag,
        component: ComponentId,
        field: &str,
    ) -> Result<Vec<String>> {
        let items: Vec<String> = (1..)
            .map(|index| self.message(language, component, &format!("{field}-{index}")))
            .take_while(Option::is_some)
            .flatten()
            .collect();

        if items.is_empty() {
            return Err(Error::I18n(format!(
                "list '{}-1' is missing for {language}",
                component.key(field)
            )));
        }
        Ok(items)
    }

    fn format(&self, language: LanguageTag, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String> {
        let bundle = self
            .bundles
            .get(&language)
            .ok_or_else(|| Error::I18n(format!("no translations for '{language}'")))?;

        let pattern = bundle
            .get_message(key)
            .and_then(|message| message.value())
            .ok_or_else(|| Error::I18n(format!("missing message '{key}' for {language}")))?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Ok(value.into_owned())
        } else {
            Err(Error::I18n(format!(
                "message '{key}' for {language} failed to format: {errors:?}"
            )))
        }
    }
}

fn build_bundle(language: LanguageTag, source: String) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::I18n(format!("{language}.ftl has {} syntax error(s)", errors.len()))
    })?;

    let locale: LanguageIdentifier = language
        .code()
        .parse()
        .map_err(|e| Error::I18n(format!("invalid locale '{language}': {e}")))?;

    let mut bundle = FluentBundle::new(vec![locale]);
    // Copy is rendered as plain text; no bidi isolation marks around arguments.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| {
        Error::I18n(format!("{language}.ftl has {} duplicate message(s)", errors.len()))
    })?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(zh: &str, en: &str) -> I18n {
        I18n::from_sources([
            (LanguageTag::Zh, zh.to_string()),
            (LanguageTag::En, en.to_string()),
        ])
        .expect("valid sources")
    }

    #[test]
    fn embedded_translations_load() {
        let i18n = I18n::load().expect("embedded translations must load");
        assert_eq!(
            i18n.require(LanguageTag::En, ComponentId::Header, "nav-home").unwrap(),
            "Home"
        );
        assert_eq!(
            i18n.require(LanguageTag::Zh, ComponentId::Header, "nav-home").unwrap(),
            "首页"
        );
    }

    #[test]
    fn lookups_are_keyed_by_language() {
        let i18n = registry("hero-title = 标题", "hero-title = Title");
        assert_eq!(i18n.message(LanguageTag::Zh, ComponentId::Hero, "title").as_deref(), Some("标题"));
        assert_eq!(i18n.message(LanguageTag::En, ComponentId::Hero, "title").as_deref(), Some("Title"));
    }

    #[test]
    fn missing_message_is_an_error_naming_the_key() {
        let i18n = registry("hero-title = 标题", "hero-title = Title");
        let err = i18n.require(LanguageTag::En, ComponentId::Hero, "subtitle").unwrap_err();
        assert!(err.to_string().contains("hero-subtitle"));
        assert!(i18n.message(LanguageTag::En, ComponentId::Hero, "subtitle").is_none());
    }

    #[test]
    fn lists_preserve_authored_order() {
        let i18n = registry(
            "footer-item-1 = 一\nfooter-item-2 = 二\nfooter-item-3 = 三",
            "footer-item-1 = one\nfooter-item-2 = two\nfooter-item-3 = three",
        );
        assert_eq!(
            i18n.require_list(LanguageTag::En, ComponentId::Footer, "item").unwrap(),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn list_stops_at_first_gap() {
        let i18n = registry(
            "footer-item-1 = 一\nfooter-item-3 = 三",
            "footer-item-1 = one\nfooter-item-3 = three",
        );
        assert_eq!(
            i18n.require_list(LanguageTag::Zh, ComponentId::Footer, "item").unwrap(),
            vec!["一"]
        );
    }

    #[test]
    fn empty_list_is_an_error() {
        let i18n = registry("hero-title = 标题", "hero-title = Title");
        assert!(i18n.require_list(LanguageTag::Zh, ComponentId::Hero, "stat").is_err());
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let i18n = registry(
            "footer-copyright = 版权所有 © { $year }",
            "footer-copyright = Copyright © { $year }",
        );
        let mut args = FluentArgs::new();
        args.set("year", "2026");
        assert_eq!(
            i18n.require_with_args(LanguageTag::En, ComponentId::Footer, "copyright", &args)
                .unwrap(),
            "Copyright © 2026"
        );
    }

    #[test]
    fn missing_language_is_rejected() {
        let result = I18n::from_sources([(LanguageTag::En, "hero-title = Title".to_string())]);
        assert!(matches!(result, Err(Error::I18n(message)) if message.contains("zh")));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = I18n::from_sources([
            (LanguageTag::Zh, "hero-title = 标题".to_string()),
            (LanguageTag::En, "hero-title = { broken".to_string()),
        ]);
        assert!(matches!(result, Err(Error::I18n(_))));
    }
}
