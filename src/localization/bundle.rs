//! Embedded Fluent bundles and the layered localizer built from them.

use ortho_config::{
    FluentLocalizer, LanguageIdentifier, LocalizationArgs, Localizer, NoOpLocalizer,
};
use std::str::FromStr;

pub(super) const EN_US: &str = include_str!("../../locales/en-US/messages.ftl");
pub(super) const ES_ES: &str = include_str!("../../locales/es-ES/messages.ftl");

/// Bundles available in addition to the English fallback, keyed by language.
const TRANSLATED_BUNDLES: &[(&str, &str)] = &[("es", ES_ES)];

/// Tries the preferred-language bundle first, then English.
struct LayeredLocalizer {
    primary: Box<dyn Localizer>,
    fallback: Box<dyn Localizer>,
}

impl Localizer for LayeredLocalizer {
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        self.primary
            .lookup(id, args)
            .or_else(|| self.fallback.lookup(id, args))
    }
}

fn english() -> Box<dyn Localizer> {
    FluentLocalizer::with_en_us_defaults([EN_US]).map_or_else(
        |_| Box::new(NoOpLocalizer::new()) as Box<dyn Localizer>,
        |localizer| Box::new(localizer) as Box<dyn Localizer>,
    )
}

fn translated(locale: LanguageIdentifier, resource: &'static str) -> Option<Box<dyn Localizer>> {
    FluentLocalizer::builder(locale)
        .with_consumer_resources([resource])
        .disable_defaults()
        .try_build()
        .ok()
        .map(|localizer| Box::new(localizer) as Box<dyn Localizer>)
}

/// Build a message localizer for `preferred_locale` with an English fallback.
///
/// Unknown or unparsable locales yield the English localizer; so does any
/// language without an embedded bundle.
#[must_use]
pub fn build_localizer(preferred_locale: Option<&str>) -> Box<dyn Localizer> {
    let fallback = english();
    let Some(locale) = preferred_locale.and_then(|raw| LanguageIdentifier::from_str(raw).ok())
    else {
        return fallback;
    };
    let language = locale.language.as_str().to_owned();
    let Some(&(_, resource)) = TRANSLATED_BUNDLES
        .iter()
        .find(|(candidate, _)| *candidate == language)
    else {
        return fallback;
    };
    let Some(primary) = translated(locale, resource) else {
        return fallback;
    };
    Box::new(LayeredLocalizer { primary, fallback })
}

#[cfg(test)]
mod tests {
    use super::super::keys::ALL_KEYS;
    use super::{EN_US, ES_ES};
    use std::collections::BTreeSet;

    fn message_ids(bundle: &str) -> BTreeSet<&str> {
        bundle
            .lines()
            .filter(|line| line.starts_with(|ch: char| ch.is_ascii_alphabetic()))
            .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
            .collect()
    }

    #[test]
    fn every_declared_key_has_an_english_and_spanish_message() {
        let declared: BTreeSet<&str> = ALL_KEYS.iter().copied().collect();
        assert_eq!(message_ids(EN_US), declared, "en-US bundle drifted from keys");
        assert_eq!(message_ids(ES_ES), declared, "es-ES bundle drifted from keys");
    }
}
