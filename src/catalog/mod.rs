//! Country reference data: codes, canonical names, and translated names.
//!
//! [`CountryCatalog`] wraps a validated dataset and a [`Translator`]. The
//! bundled dataset ships ISO 3166-1 entries with German, Spanish, and French
//! names for every country plus a handful of other locales; callers can load
//! their own dataset or swap the translator.

mod dataset;
mod translator;

pub use translator::{DatasetTranslator, Translator};

use crate::error::{CountrySelectError, Result};
use crate::locale_resolution::{fallback_chain, normalize_locale_tag};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// One country in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    alpha2: String,
    alpha3: String,
    name: String,
    alternate_names: Vec<String>,
}

impl Country {
    /// Upper-case ISO 3166-1 alpha-2 code.
    #[must_use]
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    /// Upper-case ISO 3166-1 alpha-3 code.
    #[must_use]
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Canonical English name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unofficial names accepted by lookups.
    #[must_use]
    pub fn alternate_names(&self) -> &[String] {
        &self.alternate_names
    }
}

/// Failure to load a country dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset is not valid JSON or does not match the record shape.
    #[error("country dataset is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// An alpha-2 code is not two ASCII letters.
    #[error("invalid alpha-2 code '{code}'")]
    InvalidAlpha2 {
        /// Code as written in the dataset.
        code: String,
    },
    /// An alpha-3 code is not three ASCII letters.
    #[error("invalid alpha-3 code '{code}' for country {alpha2}")]
    InvalidAlpha3 {
        /// Country the code belongs to.
        alpha2: String,
        /// Code as written in the dataset.
        code: String,
    },
    /// Two entries share an alpha-2 or alpha-3 code.
    #[error("duplicate country code '{code}'")]
    DuplicateCode {
        /// The repeated code.
        code: String,
    },
    /// A country has a blank canonical name.
    #[error("country {code} has an empty name")]
    EmptyName {
        /// Country with the blank name.
        code: String,
    },
    /// A translation is keyed by something that is not a locale tag.
    #[error("country {code} has a translation for invalid locale '{locale}'")]
    InvalidLocale {
        /// Country owning the translation.
        code: String,
        /// Offending key.
        locale: String,
    },
}

/// Validated country dataset plus the translator used for localized names.
pub struct CountryCatalog {
    countries: IndexMap<String, Country>,
    alpha3_index: HashMap<String, String>,
    name_index: HashMap<String, String>,
    translator: Arc<dyn Translator>,
}

impl fmt::Debug for CountryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryCatalog")
            .field("countries", &self.countries.len())
            .field("locales", &self.translator.available_locales())
            .finish_non_exhaustive()
    }
}

fn is_code(candidate: &str, len: usize) -> bool {
    candidate.len() == len && candidate.bytes().all(|byte| byte.is_ascii_alphabetic())
}

impl CountryCatalog {
    /// Load the dataset compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded dataset fails validation.
    pub fn bundled() -> std::result::Result<Self, CatalogError> {
        Self::from_json_str(dataset::BUNDLED)
    }

    /// Load and validate a dataset from JSON.
    ///
    /// The document is an array of records with `alpha2`, `alpha3`, `name`,
    /// and optional `unofficial_names` and `translations` (locale tag to
    /// name). Translations become the catalog's [`DatasetTranslator`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the JSON is malformed, a code is not
    /// alphabetic ASCII of the right length, a code repeats, a name is
    /// blank, or a translation key is not a locale tag.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, CatalogError> {
        let records = dataset::parse(json)?;
        let mut countries = IndexMap::with_capacity(records.len());
        let mut alpha3_index = HashMap::with_capacity(records.len());
        let mut name_index = HashMap::new();
        let mut translator = DatasetTranslator::default();

        for record in records {
            let alpha2 = record.alpha2.trim().to_ascii_uppercase();
            if !is_code(&alpha2, 2) {
                return Err(CatalogError::InvalidAlpha2 { code: record.alpha2 });
            }
            let alpha3 = record.alpha3.trim().to_ascii_uppercase();
            if !is_code(&alpha3, 3) {
                return Err(CatalogError::InvalidAlpha3 {
                    alpha2,
                    code: record.alpha3,
                });
            }
            let name = record.name.trim().to_owned();
            if name.is_empty() {
                return Err(CatalogError::EmptyName { code: alpha2 });
            }
            if countries.contains_key(&alpha2) {
                return Err(CatalogError::DuplicateCode { code: alpha2 });
            }
            if alpha3_index.insert(alpha3.clone(), alpha2.clone()).is_some() {
                return Err(CatalogError::DuplicateCode { code: alpha3 });
            }

            for (raw_locale, translated) in record.translations {
                let Some(locale) = normalize_locale_tag(&raw_locale) else {
                    return Err(CatalogError::InvalidLocale {
                        code: alpha2,
                        locale: raw_locale,
                    });
                };
                translator.insert(&alpha2, locale, translated);
            }

            let alternate_names: Vec<String> = record
                .unofficial_names
                .iter()
                .map(|alias| alias.trim().to_owned())
                .filter(|alias| !alias.is_empty())
                .collect();
            for known in std::iter::once(&name).chain(&alternate_names) {
                name_index
                    .entry(known.to_lowercase())
                    .or_insert_with(|| alpha2.clone());
            }

            countries.insert(
                alpha2.clone(),
                Country {
                    alpha2,
                    alpha3,
                    name,
                    alternate_names,
                },
            );
        }

        debug!(countries = countries.len(), "loaded country catalog");
        Ok(Self {
            countries,
            alpha3_index,
            name_index,
            translator: Arc::new(translator),
        })
    }

    /// Replace the translation backend.
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Number of countries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalog holds no countries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Every alpha-2 code, in dataset order.
    #[must_use]
    pub fn all_codes(&self) -> Vec<&str> {
        self.countries.keys().map(String::as_str).collect()
    }

    /// Countries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// Look up a country by alpha-2 or alpha-3 code, ignoring case.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Country> {
        let upper = code.trim().to_ascii_uppercase();
        if is_code(&upper, 2) {
            return self.countries.get(&upper);
        }
        if is_code(&upper, 3) {
            return self
                .alpha3_index
                .get(&upper)
                .and_then(|alpha2| self.countries.get(alpha2));
        }
        None
    }

    /// Resolve a code or a name to a country.
    ///
    /// Codes win over names. Names are matched without regard to case,
    /// first against canonical and alternate names, then against every
    /// translated name the translator knows.
    ///
    /// # Errors
    ///
    /// Returns [`CountrySelectError::CountryNotFound`] carrying `token` when
    /// nothing matches.
    pub fn resolve(&self, token: &str) -> Result<&Country> {
        self.get(token)
            .or_else(|| self.find_by_name(token))
            .ok_or_else(|| CountrySelectError::country_not_found(token))
    }

    fn find_by_name(&self, token: &str) -> Option<&Country> {
        let needle = token.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(alpha2) = self.name_index.get(&needle) {
            return self.countries.get(alpha2);
        }
        let locales = self.translator.available_locales();
        self.countries.values().find(|country| {
            locales.iter().any(|locale| {
                self.translator
                    .translate(&country.alpha2, locale)
                    .is_some_and(|translated| translated.to_lowercase() == needle)
            })
        })
    }

    /// Name of `country` in `locale`.
    ///
    /// Walks the locale's fallback chain, most specific tag first, and
    /// returns the canonical name when no step has a translation.
    #[must_use]
    pub fn translated_name(&self, country: &Country, locale: &str) -> String {
        fallback_chain(locale)
            .iter()
            .find_map(|candidate| self.translator.translate(&country.alpha2, candidate))
            .unwrap_or_else(|| country.name.clone())
    }

    /// Locales the translator can answer for.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        self.translator.available_locales()
    }
}

#[cfg(test)]
mod tests {
    use super::translator::MockTranslator;
    use super::*;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    const SMALL: &str = r#"[
        {"alpha2": "de", "alpha3": "deu", "name": "Germany",
         "translations": {"de": "Deutschland", "fr": "Allemagne"}},
        {"alpha2": "US", "alpha3": "USA", "name": "United States",
         "unofficial_names": ["United States of America"],
         "translations": {"es": "Estados Unidos", "zh_TW": "美國"}}
    ]"#;

    #[fixture]
    fn small() -> CountryCatalog {
        CountryCatalog::from_json_str(SMALL).expect("fixture dataset should load")
    }

    #[rstest]
    #[case("DE", "DE")]
    #[case(" de ", "DE")]
    #[case("usa", "US")]
    #[case("germany", "DE")]
    #[case("United States of America", "US")]
    #[case("allemagne", "DE")]
    #[case("美國", "US")]
    fn resolves_codes_and_names(small: CountryCatalog, #[case] token: &str, #[case] code: &str) {
        let country = small.resolve(token).expect("token should resolve");
        assert_eq!(country.alpha2(), code);
    }

    #[rstest]
    #[case("Atlantis")]
    #[case("ZZ")]
    #[case("")]
    fn unresolved_tokens_carry_the_input(small: CountryCatalog, #[case] token: &str) {
        let err = small.resolve(token).expect_err("token should not resolve");
        assert_eq!(err.token(), Some(token));
    }

    #[rstest]
    fn codes_keep_dataset_order_and_case(small: CountryCatalog) {
        assert_eq!(small.all_codes(), vec!["DE", "US"]);
        let germany = small.get("DE").expect("DE present");
        assert_eq!(germany.alpha3(), "DEU");
    }

    #[rstest]
    fn translation_keys_are_normalized(small: CountryCatalog) {
        assert_eq!(small.available_locales(), vec!["de", "es", "fr", "zh-TW"]);
        let us = small.get("US").expect("US present");
        assert_eq!(small.translated_name(us, "zh-TW"), "美國");
        assert_eq!(small.translated_name(us, "zh-Hant-TW"), "美國");
        assert_eq!(small.translated_name(us, "zh-CN"), "United States");
    }

    #[rstest]
    #[case("de-AT", "Deutschland")]
    #[case("de", "Deutschland")]
    #[case("fr-CA", "Allemagne")]
    #[case("en", "Germany")]
    #[case("not a locale", "Germany")]
    fn translated_name_falls_back(
        small: CountryCatalog,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        let germany = small.get("DE").expect("DE present");
        assert_eq!(small.translated_name(germany, locale), expected);
    }

    #[rstest]
    fn translator_is_asked_most_specific_first(small: CountryCatalog) {
        let mut translator = MockTranslator::new();
        let mut seq = mockall::Sequence::new();
        for locale in ["zh-Hant-TW", "zh-Hant"] {
            translator
                .expect_translate()
                .with(eq("DE"), eq(locale))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| None);
        }
        translator
            .expect_translate()
            .with(eq("DE"), eq("zh-TW"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Some("德國".to_owned()));
        let catalog = small.with_translator(Arc::new(translator));
        let germany = catalog.get("DE").expect("DE present");
        assert_eq!(catalog.translated_name(germany, "zh-Hant-TW"), "德國");
    }

    #[rstest]
    #[case(r#"[{"alpha2": "D", "alpha3": "DEU", "name": "Germany"}]"#, "alpha-2")]
    #[case(r#"[{"alpha2": "DE", "alpha3": "DE1", "name": "Germany"}]"#, "alpha-3")]
    #[case(r#"[{"alpha2": "DE", "alpha3": "DEU", "name": "  "}]"#, "empty name")]
    #[case(
        r#"[{"alpha2": "DE", "alpha3": "DEU", "name": "Germany"},
            {"alpha2": "de", "alpha3": "DDR", "name": "East Germany"}]"#,
        "duplicate"
    )]
    #[case(
        r#"[{"alpha2": "DE", "alpha3": "DEU", "name": "Germany"},
            {"alpha2": "DD", "alpha3": "deu", "name": "East Germany"}]"#,
        "duplicate"
    )]
    #[case(
        r#"[{"alpha2": "DE", "alpha3": "DEU", "name": "Germany", "translations": {"!!": "x"}}]"#,
        "invalid locale"
    )]
    #[case("{", "malformed")]
    fn invalid_datasets_are_rejected(#[case] json: &str, #[case] fragment: &str) {
        let err = CountryCatalog::from_json_str(json).expect_err("dataset should be rejected");
        assert!(
            err.to_string().contains(fragment),
            "expected '{fragment}' in '{err}'"
        );
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = CountryCatalog::bundled().expect("bundled dataset should load");
        assert_eq!(catalog.len(), 250);
        assert!(catalog.available_locales().contains(&"de".to_owned()));
    }

    #[test]
    fn bundled_locales_translate_every_country() {
        let catalog = CountryCatalog::bundled().expect("bundled dataset should load");
        for locale in catalog.available_locales() {
            let untranslated: Vec<&str> = catalog
                .iter()
                .map(Country::alpha2)
                .filter(|code| catalog.translator.translate(code, &locale).is_none())
                .collect();
            assert!(
                untranslated.is_empty(),
                "{locale} lacks names for {untranslated:?}"
            );
        }
    }
}
