//! Shared helpers for the `country_select` test suites.
//!
//! Fixture catalogs, stub locale providers, and guards for the process-wide
//! message localizer.

pub mod catalog;
pub mod fluent;
pub mod locale_stubs;
pub mod localizer;

pub use catalog::{bundled_select, fixture_catalog, fixture_select};
