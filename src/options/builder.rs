//! Option-list construction.
//!
//! A build resolves the working set (`only`, or the whole catalog minus
//! `except`), formats and sorts it, and, when priority countries are given,
//! prepends them as their own group above a disabled divider. Selection is
//! consumed by the priority group first so a country listed in both groups
//! is only selected once.

use super::config::SelectionConfig;
use super::list::{OptionDescriptor, OptionList};
use crate::catalog::{Country, CountryCatalog};
use crate::error::{CountrySelectError, Result};
use crate::formats::{FormatContext, FormatFn, FormatRegistry};
use crate::icons::with_icon;
use crate::transliterate::SortKey;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

struct Entry<'c> {
    country: &'c Country,
    label: String,
    code: String,
}

/// Values matched against option codes without regard to ASCII case.
struct CodeSet(Vec<String>);

impl CodeSet {
    fn new(values: &[String]) -> Self {
        Self(
            values
                .iter()
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        )
    }

    fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|value| value.eq_ignore_ascii_case(code))
    }

    fn remove_all<'e>(&mut self, codes: impl IntoIterator<Item = &'e str>) {
        for code in codes {
            self.0.retain(|value| !value.eq_ignore_ascii_case(code));
        }
    }
}

pub(super) struct Builder<'a> {
    catalog: &'a CountryCatalog,
    config: &'a SelectionConfig,
    format: &'a FormatFn,
    locale: &'a str,
}

impl<'a> Builder<'a> {
    pub(super) fn new(
        catalog: &'a CountryCatalog,
        formats: &'a FormatRegistry,
        config: &'a SelectionConfig,
        default_locale: &'a str,
    ) -> Result<Self> {
        let format = formats.get(config.format())?;
        let locale = config
            .locale()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .unwrap_or(default_locale);
        Ok(Self {
            catalog,
            config,
            format,
            locale,
        })
    }

    pub(super) fn build(&self) -> Result<OptionList> {
        let (working, sort_main) = self.working_set()?;
        let priority = self.resolve_unique(self.config.priority_countries())?;

        let priority_entries = self.entries(&priority, self.config.sort_provided());
        let main_entries = self.entries(&working, sort_main);
        self.check_selected([priority_entries.as_slice(), main_entries.as_slice()])?;

        let mut selected = CodeSet::new(self.config.selected());
        let disabled = CodeSet::new(self.config.disabled());
        let mut options = Vec::with_capacity(priority_entries.len() + main_entries.len() + 1);
        let mut divider_index = None;

        if !priority_entries.is_empty() {
            options.extend(describe(&priority_entries, &selected, &disabled));
            selected.remove_all(priority_entries.iter().map(|entry| entry.code.as_str()));
            divider_index = Some(options.len());
            options.push(OptionDescriptor::divider(self.config.divider()));
        }
        options.extend(describe(&main_entries, &selected, &disabled));

        debug!(
            locale = self.locale,
            options = options.len(),
            divider = ?divider_index,
            "built country options"
        );
        Ok(OptionList::new(options, divider_index))
    }

    fn working_set(&self) -> Result<(Vec<&'a Country>, bool)> {
        if !self.config.only().is_empty() {
            let only = self.resolve_unique(self.config.only())?;
            return Ok((only, self.config.sort_provided()));
        }
        let mut excluded = HashSet::new();
        for token in self.config.except() {
            match self.catalog.resolve(token) {
                Ok(country) => {
                    excluded.insert(country.alpha2());
                }
                Err(_) => debug!(token = token.as_str(), "ignoring unknown except entry"),
            }
        }
        let working = self
            .catalog
            .iter()
            .filter(|country| !excluded.contains(country.alpha2()))
            .collect();
        Ok((working, true))
    }

    /// Resolve every token, keeping the first occurrence of each country.
    fn resolve_unique(&self, tokens: &[String]) -> Result<Vec<&'a Country>> {
        let mut seen = IndexMap::with_capacity(tokens.len());
        for token in tokens {
            let country = self.catalog.resolve(token)?;
            seen.entry(country.alpha2()).or_insert(country);
        }
        Ok(seen.into_values().collect())
    }

    fn entries(&self, countries: &[&'a Country], sort: bool) -> Vec<Entry<'a>> {
        let mut entries: Vec<Entry<'a>> = countries
            .iter()
            .map(|&country| {
                let name = self.catalog.translated_name(country, self.locale);
                let ctx = FormatContext {
                    country,
                    locale: self.locale,
                    name: &name,
                };
                let (label, code) = (self.format)(&ctx).into_parts(country.alpha2());
                Entry {
                    country,
                    label,
                    code,
                }
            })
            .collect();
        if sort {
            entries.sort_by_cached_key(|entry| SortKey::new(&entry.label));
        }
        if self.config.icons() {
            for entry in &mut entries {
                let label = std::mem::take(&mut entry.label);
                entry.label = with_icon(label, entry.country.alpha2());
            }
        }
        entries
    }

    /// Every non-blank selected value must name an emitted option or at
    /// least a country the catalog knows.
    fn check_selected(&self, groups: [&[Entry<'a>]; 2]) -> Result<()> {
        for value in self.config.selected() {
            let token = value.trim();
            if token.is_empty() {
                continue;
            }
            let matched = groups
                .iter()
                .flat_map(|group| group.iter())
                .any(|entry| entry.code.eq_ignore_ascii_case(token));
            if !matched && self.catalog.resolve(token).is_err() {
                return Err(CountrySelectError::country_not_found(value.as_str()));
            }
        }
        Ok(())
    }
}

fn describe<'e>(
    entries: &'e [Entry<'_>],
    selected: &'e CodeSet,
    disabled: &'e CodeSet,
) -> impl Iterator<Item = OptionDescriptor> + 'e {
    entries.iter().map(|entry| OptionDescriptor {
        label: entry.label.clone(),
        code: entry.code.clone(),
        selected: selected.contains(&entry.code),
        disabled: disabled.contains(&entry.code),
    })
}
