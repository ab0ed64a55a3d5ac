//! Small country datasets for exercising catalog and builder edge cases.

use country_select::{CountryCatalog, CountrySelect};
use std::sync::Arc;

/// Eight countries with a deliberately narrow vocabulary.
///
/// * `KR` is only known as "Korea (Republic of)", so "South Korea" does not
///   resolve.
/// * `DE` has a `de` translation but no `de-AT` one.
/// * `EU` has no flag glyph.
/// * `CN`, `JP`, `KR`, and `US` carry `zh-TW` names.
pub const FIXTURE_DATASET: &str = r#"[
  {"alpha2": "AR", "alpha3": "ARG", "name": "Argentina",
   "translations": {"de": "Argentinien", "es": "Argentina"}},
  {"alpha2": "CN", "alpha3": "CHN", "name": "China",
   "translations": {"de": "China", "zh-TW": "中國"}},
  {"alpha2": "DE", "alpha3": "DEU", "name": "Germany",
   "translations": {"de": "Deutschland", "es": "Alemania"}},
  {"alpha2": "EU", "alpha3": "EUU", "name": "European Union"},
  {"alpha2": "JP", "alpha3": "JPN", "name": "Japan",
   "translations": {"de": "Japan", "zh-TW": "日本"}},
  {"alpha2": "KR", "alpha3": "KOR", "name": "Korea (Republic of)",
   "translations": {"zh-TW": "南韓"}},
  {"alpha2": "PT", "alpha3": "PRT", "name": "Portugal",
   "translations": {"de": "Portugal", "es": "Portugal"}},
  {"alpha2": "US", "alpha3": "USA", "name": "United States",
   "unofficial_names": ["United States of America"],
   "translations": {"de": "Vereinigte Staaten", "es": "Estados Unidos", "zh-TW": "美國"}}
]"#;

/// Load [`FIXTURE_DATASET`].
///
/// # Panics
///
/// Panics if the fixture fails validation.
#[must_use]
pub fn fixture_catalog() -> CountryCatalog {
    CountryCatalog::from_json_str(FIXTURE_DATASET).expect("fixture dataset should load")
}

/// A builder over [`fixture_catalog`].
#[must_use]
pub fn fixture_select() -> CountrySelect {
    CountrySelect::new(Arc::new(fixture_catalog()))
}

/// A builder over the bundled dataset.
///
/// # Panics
///
/// Panics if the bundled dataset fails validation.
#[must_use]
pub fn bundled_select() -> CountrySelect {
    CountrySelect::bundled().expect("bundled dataset should load")
}
