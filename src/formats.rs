//! Named label formatters.
//!
//! A formatter turns a country into the text shown in its option, optionally
//! overriding the submitted value. Formatters live in a [`FormatRegistry`]
//! owned by each [`CountrySelect`](crate::CountrySelect) and are picked per
//! build by name.

use crate::catalog::Country;
use crate::error::{CountrySelectError, Result};
use crate::localization::{self, keys};
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;

/// Name of the formatter used when a configuration names none.
pub const DEFAULT_FORMAT: &str = "default";

/// Inputs available to a formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    /// Country being formatted.
    pub country: &'a Country,
    /// Locale the option list is built for.
    pub locale: &'a str,
    /// Name of the country in `locale`, already resolved through fallbacks.
    pub name: &'a str,
}

/// Output of a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    /// Display text; the option value stays the alpha-2 code.
    Label(String),
    /// Display text plus a replacement option value.
    LabelWithCode {
        /// Display text.
        label: String,
        /// Submitted value.
        code: String,
    },
}

impl Formatted {
    /// Split into `(label, code)`, using `default_code` when no override was
    /// produced.
    #[must_use]
    pub fn into_parts(self, default_code: &str) -> (String, String) {
        match self {
            Self::Label(label) => (label, default_code.to_owned()),
            Self::LabelWithCode { label, code } => (label, code),
        }
    }
}

/// Shared formatter callable.
pub type FormatFn = Arc<dyn Fn(&FormatContext<'_>) -> Formatted + Send + Sync>;

/// Formatters by name. Registration replaces an existing entry; nothing is
/// ever removed.
#[derive(Clone)]
pub struct FormatRegistry {
    formats: IndexMap<String, FormatFn>,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// Registry holding the built-in formatters: `default` (translated
    /// name), `with_alpha2` (`"Germany (DE)"`), and `alpha3` (translated name
    /// submitted as the alpha-3 code).
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            formats: IndexMap::new(),
        };
        registry.register(DEFAULT_FORMAT, |ctx: &FormatContext<'_>| {
            Formatted::Label(ctx.name.to_owned())
        });
        registry.register("with_alpha2", |ctx: &FormatContext<'_>| {
            Formatted::Label(format!("{} ({})", ctx.name, ctx.country.alpha2()))
        });
        registry.register("alpha3", |ctx: &FormatContext<'_>| Formatted::LabelWithCode {
            label: ctx.name.to_owned(),
            code: ctx.country.alpha3().to_owned(),
        });
        registry
    }

    /// Add or replace the formatter called `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, format: F)
    where
        F: Fn(&FormatContext<'_>) -> Formatted + Send + Sync + 'static,
    {
        self.formats.insert(name.into(), Arc::new(format));
    }

    /// Fetch the formatter called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CountrySelectError::InvalidConfiguration`] for unknown
    /// names, listing the registered ones.
    pub fn get(&self, name: &str) -> Result<&FormatFn> {
        self.formats.get(name).ok_or_else(|| {
            CountrySelectError::invalid_configuration(
                localization::message(keys::CONFIG_UNKNOWN_FORMAT)
                    .with_arg("format", name)
                    .with_arg("known", self.names().join(", ")),
            )
        })
    }

    /// Registered formatter names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}
