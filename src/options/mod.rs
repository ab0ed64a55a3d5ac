//! Option-list building over a country catalog.
//!
//! [`CountrySelect`] owns the catalog, the formatter registry, and the
//! default locale. Each [`CountrySelect::build_options`] call takes its own
//! [`SelectionConfig`]; nothing from one build leaks into the next.
//!
//! ```rust
//! use country_select::{CountrySelect, SelectionConfig};
//!
//! let select = CountrySelect::bundled().expect("bundled catalog");
//! let list = select
//!     .build_options(
//!         &SelectionConfig::default()
//!             .with_only(["PT", "DE", "AR"])
//!             .with_priority_countries(["DE"])
//!             .with_selected(["DE"]),
//!     )
//!     .expect("build options");
//! assert_eq!(list.codes(), vec!["DE", "---------------", "AR", "DE", "PT"]);
//! assert_eq!(list.selected_codes(), vec!["DE"]);
//! ```

mod builder;
mod config;
mod list;

pub use config::{DEFAULT_DIVIDER, SelectionConfig};
pub use list::{OptionDescriptor, OptionList};

use crate::catalog::{CatalogError, CountryCatalog};
use crate::error::Result;
use crate::formats::{FormatContext, FormatRegistry, Formatted};
use crate::locale_resolution::{
    DEFAULT_LOCALE, SysLocale, SystemEnv, normalize_locale_tag, resolve_default_locale,
};
use builder::Builder;
use std::sync::Arc;

/// Builds option lists from a shared catalog.
#[derive(Debug, Clone)]
pub struct CountrySelect {
    catalog: Arc<CountryCatalog>,
    formats: FormatRegistry,
    default_locale: String,
}

impl CountrySelect {
    /// Builder over `catalog` with the built-in formatters and English as
    /// the default locale.
    #[must_use]
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        Self {
            catalog,
            formats: FormatRegistry::new(),
            default_locale: DEFAULT_LOCALE.to_owned(),
        }
    }

    /// Builder over the bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled dataset fails validation.
    pub fn bundled() -> std::result::Result<Self, CatalogError> {
        CountryCatalog::bundled().map(|catalog| Self::new(Arc::new(catalog)))
    }

    /// Locale used when a configuration does not name one. Tags are
    /// normalized (`de_AT` becomes `de-AT`); unparsable input is kept as
    /// given and resolves to canonical names.
    #[must_use]
    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = normalize_locale_tag(locale).unwrap_or_else(|| locale.to_owned());
        self
    }

    /// Take the default locale from `COUNTRY_SELECT_LOCALE` or the host
    /// locale, falling back to English.
    #[must_use]
    pub fn with_ambient_locale(mut self) -> Self {
        self.default_locale = resolve_default_locale(None, &SystemEnv, &SysLocale);
        self
    }

    /// Add or replace a named formatter.
    pub fn register_format<F>(&mut self, name: impl Into<String>, format: F)
    where
        F: Fn(&FormatContext<'_>) -> Formatted + Send + Sync + 'static,
    {
        self.formats.register(name, format);
    }

    /// The catalog options are built from.
    #[must_use]
    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    /// Registered formatters.
    #[must_use]
    pub const fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Locale used when a configuration names none.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Build the option list described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CountrySelectError::InvalidConfiguration`] for an unknown
    /// formatter, checked before any lookup, and
    /// [`CountrySelectError::CountryNotFound`] when an `only` or priority
    /// entry does not resolve, or a selected value matches neither an option
    /// nor a known country.
    ///
    /// [`CountrySelectError::InvalidConfiguration`]: crate::CountrySelectError::InvalidConfiguration
    /// [`CountrySelectError::CountryNotFound`]: crate::CountrySelectError::CountryNotFound
    pub fn build_options(&self, config: &SelectionConfig) -> Result<OptionList> {
        Builder::new(&self.catalog, &self.formats, config, &self.default_locale)?.build()
    }
}
