//! Per-call configuration for option-list builds.

use crate::formats::DEFAULT_FORMAT;

/// Divider label used between priority and main groups unless overridden.
pub const DEFAULT_DIVIDER: &str = "---------------";

/// Everything one build needs besides the catalog and formatter registry.
///
/// Start from [`SelectionConfig::default`] and chain `with_*` calls:
///
/// ```rust
/// use country_select::SelectionConfig;
///
/// let config = SelectionConfig::default()
///     .with_locale("de")
///     .with_priority_countries(["DE", "AT", "CH"])
///     .with_selected(["CH"]);
/// assert_eq!(config.locale(), Some("de"));
/// assert!(config.sort_provided());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    locale: Option<String>,
    priority_countries: Vec<String>,
    divider: String,
    only: Vec<String>,
    except: Vec<String>,
    selected: Vec<String>,
    disabled: Vec<String>,
    format: String,
    sort_provided: bool,
    icons: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            locale: None,
            priority_countries: Vec::new(),
            divider: DEFAULT_DIVIDER.to_owned(),
            only: Vec::new(),
            except: Vec::new(),
            selected: Vec::new(),
            disabled: Vec::new(),
            format: DEFAULT_FORMAT.to_owned(),
            sort_provided: true,
            icons: false,
        }
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl SelectionConfig {
    /// Locale for translated names. Unset means the builder's default.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Codes or names rendered first, above a divider.
    #[must_use]
    pub fn with_priority_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_countries = collect(countries);
        self
    }

    /// Label and value of the divider option.
    #[must_use]
    pub fn with_divider(mut self, divider: impl Into<String>) -> Self {
        self.divider = divider.into();
        self
    }

    /// Restrict the list to these codes or names.
    #[must_use]
    pub fn with_only<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = collect(countries);
        self
    }

    /// Drop these codes or names from the full list. Ignored when `only` is
    /// set.
    #[must_use]
    pub fn with_except<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = collect(countries);
        self
    }

    /// Option values to mark selected. A single value is a one-element list.
    #[must_use]
    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = collect(values);
        self
    }

    /// Option values to mark disabled.
    #[must_use]
    pub fn with_disabled<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled = collect(values);
        self
    }

    /// Registered formatter to apply.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Whether `only` and priority lists are sorted (`true`) or kept in the
    /// order given.
    #[must_use]
    pub const fn with_sort_provided(mut self, sort_provided: bool) -> Self {
        self.sort_provided = sort_provided;
        self
    }

    /// Whether to append flag glyphs to labels.
    #[must_use]
    pub const fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    /// Explicit locale, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Priority codes or names, in caller order.
    #[must_use]
    pub fn priority_countries(&self) -> &[String] {
        &self.priority_countries
    }

    /// Divider label and value.
    #[must_use]
    pub fn divider(&self) -> &str {
        &self.divider
    }

    /// Inclusion list.
    #[must_use]
    pub fn only(&self) -> &[String] {
        &self.only
    }

    /// Exclusion list.
    #[must_use]
    pub fn except(&self) -> &[String] {
        &self.except
    }

    /// Values to mark selected.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Values to mark disabled.
    #[must_use]
    pub fn disabled(&self) -> &[String] {
        &self.disabled
    }

    /// Formatter name.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Sort flag for caller-provided lists.
    #[must_use]
    pub const fn sort_provided(&self) -> bool {
        self.sort_provided
    }

    /// Icon flag.
    #[must_use]
    pub const fn icons(&self) -> bool {
        self.icons
    }
}
