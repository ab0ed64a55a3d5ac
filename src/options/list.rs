//! Built option lists.

use serde::Serialize;

/// One `<option>` in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    /// Display text.
    pub label: String,
    /// Submitted value.
    pub code: String,
    /// Whether the option starts selected.
    pub selected: bool,
    /// Whether the option is disabled.
    pub disabled: bool,
}

impl OptionDescriptor {
    pub(super) fn divider(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            code: label.to_owned(),
            selected: false,
            disabled: true,
        }
    }
}

/// Ordered options plus the position of the divider, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    options: Vec<OptionDescriptor>,
    divider_index: Option<usize>,
}

impl OptionList {
    pub(super) const fn new(options: Vec<OptionDescriptor>, divider_index: Option<usize>) -> Self {
        Self {
            options,
            divider_index,
        }
    }

    /// All options in output order, divider included.
    #[must_use]
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Index of the divider option.
    #[must_use]
    pub const fn divider_index(&self) -> Option<usize> {
        self.divider_index
    }

    /// Options above the divider; empty without a priority list.
    #[must_use]
    pub fn priority_group(&self) -> &[OptionDescriptor] {
        self.divider_index
            .and_then(|index| self.options.get(..index))
            .unwrap_or_default()
    }

    /// Options below the divider, or every option without one.
    #[must_use]
    pub fn main_group(&self) -> &[OptionDescriptor] {
        self.divider_index.map_or(self.options.as_slice(), |index| {
            self.options.get(index + 1..).unwrap_or_default()
        })
    }

    /// Option values in output order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.code.as_str()).collect()
    }

    /// Values of the options marked selected.
    #[must_use]
    pub fn selected_codes(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.code.as_str())
            .collect()
    }

    /// Number of options, divider included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the list has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.options.iter()
    }

    /// Consume the list, keeping only the options.
    #[must_use]
    pub fn into_options(self) -> Vec<OptionDescriptor> {
        self.options
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a OptionDescriptor;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(code: &str) -> OptionDescriptor {
        OptionDescriptor {
            label: code.to_owned(),
            code: code.to_owned(),
            selected: false,
            disabled: false,
        }
    }

    #[test]
    fn groups_split_around_the_divider() {
        let list = OptionList::new(
            vec![option("US"), OptionDescriptor::divider("--"), option("CA"), option("US")],
            Some(1),
        );
        assert_eq!(list.priority_group(), &[option("US")]);
        assert_eq!(list.main_group(), &[option("CA"), option("US")]);
    }

    #[test]
    fn without_divider_everything_is_main() {
        let list = OptionList::new(vec![option("US"), option("CA")], None);
        assert!(list.priority_group().is_empty());
        assert_eq!(list.main_group().len(), 2);
    }

    #[test]
    fn serializes_divider_index() {
        let list = OptionList::new(vec![OptionDescriptor::divider("--")], Some(0));
        let json = serde_json::to_value(&list).expect("serialize");
        assert_eq!(json["divider_index"], 0);
        assert_eq!(json["options"][0]["disabled"], true);
    }
}
