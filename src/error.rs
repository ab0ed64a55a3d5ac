//! Errors raised while building country option lists.
//!
//! Only two conditions exist: a code or name that the catalog cannot
//! resolve, and a configuration rejected before any catalog work. Both abort
//! the current build; neither is retried.

// The thiserror/miette derives trip `unused_assignments` on some toolchains.
// `#[expect]` would fail where the lint does not fire, so this stays `allow`.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::localization::{self, LocalizedMessage, keys};
use miette::Diagnostic;
use thiserror::Error;

/// Failure of a single option-list build.
#[derive(Debug, Error, Diagnostic)]
pub enum CountrySelectError {
    /// A requested code or name did not resolve against the catalog.
    #[error("{message}")]
    #[diagnostic(code(country_select::country_not_found))]
    CountryNotFound {
        /// The offending input, as supplied by the caller.
        token: String,
        /// Localised error message.
        message: LocalizedMessage,
        /// Localised hint for resolving the error.
        #[help]
        help: LocalizedMessage,
    },

    /// The configuration was rejected before any catalog lookups happened.
    #[error("{message}")]
    #[diagnostic(code(country_select::invalid_configuration))]
    InvalidConfiguration {
        /// Localised description of what was wrong.
        details: LocalizedMessage,
        /// Localised error message wrapping `details`.
        message: LocalizedMessage,
    },
}

impl CountrySelectError {
    /// Build a [`CountrySelectError::CountryNotFound`] for the unresolved
    /// `input`.
    #[must_use]
    pub fn country_not_found(input: impl Into<String>) -> Self {
        let token = input.into();
        let message =
            localization::message(keys::ERROR_COUNTRY_NOT_FOUND).with_arg("token", &token);
        Self::CountryNotFound {
            token,
            message,
            help: localization::message(keys::ERROR_COUNTRY_NOT_FOUND_HELP),
        }
    }

    /// Build a [`CountrySelectError::InvalidConfiguration`] from `details`.
    #[must_use]
    pub fn invalid_configuration(details: LocalizedMessage) -> Self {
        let message = localization::message(keys::ERROR_INVALID_CONFIGURATION)
            .with_arg("details", &details);
        Self::InvalidConfiguration { details, message }
    }

    /// The unresolved input for lookup failures.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::CountryNotFound { token, .. } => Some(token),
            Self::InvalidConfiguration { .. } => None,
        }
    }
}

/// Result alias for option-list operations.
pub type Result<T, E = CountrySelectError> = std::result::Result<T, E>;
