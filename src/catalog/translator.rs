//! Translation backends for country names.

use std::collections::{BTreeSet, HashMap};

/// Source of localized country names.
///
/// Implementations answer for one exact locale tag at a time; the catalog
/// walks the fallback chain (`de-AT` then `de`) itself.
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Name of the country with alpha-2 `code` in `locale`, if known.
    fn translate(&self, code: &str, locale: &str) -> Option<String>;

    /// Every locale tag this translator can answer for, sorted.
    fn available_locales(&self) -> Vec<String>;
}

/// Translator backed by the translations embedded in a dataset.
#[derive(Debug, Default, Clone)]
pub struct DatasetTranslator {
    names: HashMap<String, HashMap<String, String>>,
    locales: BTreeSet<String>,
}

impl DatasetTranslator {
    pub(super) fn insert(&mut self, code: &str, locale: String, name: String) {
        self.locales.insert(locale.clone());
        self.names
            .entry(code.to_owned())
            .or_default()
            .insert(locale, name);
    }
}

impl Translator for DatasetTranslator {
    fn translate(&self, code: &str, locale: &str) -> Option<String> {
        self.names.get(code)?.get(locale).cloned()
    }

    fn available_locales(&self) -> Vec<String> {
        self.locales.iter().cloned().collect()
    }
}
