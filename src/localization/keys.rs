//! Fluent message identifiers used by `country_select`.
//!
//! Keys are declared through `define_keys!` so the full set is available as
//! [`ALL_KEYS`] for bundle audits.

macro_rules! define_keys {
    ($($(#[$meta:meta])* $name:ident => $value:literal,)*) => {
        $(
            $(#[$meta])*
            pub const $name: &str = $value;
        )*

        /// Every message identifier declared in this module.
        pub const ALL_KEYS: &[&str] = &[$($value),*];
    };
}

define_keys! {
    /// A code or name did not resolve against the catalog.
    ERROR_COUNTRY_NOT_FOUND => "error-country-not-found",
    /// Hint attached to country lookup failures.
    ERROR_COUNTRY_NOT_FOUND_HELP => "error-country-not-found-help",
    /// The selection configuration was rejected before building.
    ERROR_INVALID_CONFIGURATION => "error-invalid-configuration",
    /// A formatter name is not present in the registry.
    CONFIG_UNKNOWN_FORMAT => "config-unknown-format",
    /// Options were passed positionally where keyword arguments are expected.
    CONFIG_POSITIONAL_OPTIONS => "config-positional-options",
    /// An option value had the wrong shape.
    CONFIG_INVALID_VALUE => "config-invalid-value",
    /// The `country_select` helper was called without a field name.
    CONFIG_MISSING_FIELD_NAME => "config-missing-field-name",
}
