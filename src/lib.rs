//! Localized, sortable, filterable country lists for HTML select controls.
//!
//! A [`CountrySelect`] combines a [`CountryCatalog`] with named formatters
//! and builds an [`OptionList`] per [`SelectionConfig`]: priority countries
//! above a divider, `only`/`except` filtering, translated labels sorted with
//! a Latin transliteration fallback, and selection state that never marks
//! the same country twice. The [`helper`] module exposes the builder to
//! `MiniJinja` templates, and the `country-select` binary to the shell.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod formats;
pub mod helper;
pub mod icons;
pub mod locale_resolution;
pub mod localization;
pub mod options;
pub mod render;
pub mod runner;
pub mod transliterate;

pub use catalog::{CatalogError, Country, CountryCatalog, Translator};
pub use error::CountrySelectError;
pub use formats::{FormatContext, FormatRegistry, Formatted};
pub use options::{CountrySelect, OptionDescriptor, OptionList, SelectionConfig};
pub use render::{HtmlRenderer, OptionRenderer, SelectField};
