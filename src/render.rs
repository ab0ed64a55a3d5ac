//! Rendering option lists as markup.
//!
//! The builder only produces [`OptionList`] values. Turning them into tags
//! goes through [`OptionRenderer`], so template integrations and the CLI
//! share one algorithm regardless of the markup they emit.

use crate::options::{OptionDescriptor, OptionList};
use minijinja::HtmlEscape;

/// Name, id, and cardinality of a `<select>` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    name: String,
    id: Option<String>,
    multiple: bool,
}

impl SelectField {
    /// Field submitted as `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            multiple: false,
        }
    }

    /// Use `id` instead of deriving one from the name.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Allow several selected options.
    #[must_use]
    pub const fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Submitted name; multiple selects gain a trailing `[]`.
    #[must_use]
    pub fn name(&self) -> String {
        if self.multiple && !self.name.ends_with("[]") {
            format!("{}[]", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Explicit id, or one derived from the name: `]` is dropped and any
    /// other character outside `[-A-Za-z0-9:.]` becomes `_`, so
    /// `walrus[country_code]` yields `walrus_country_code`.
    #[must_use]
    pub fn id(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        self.name
            .trim_end_matches("[]")
            .chars()
            .filter(|&ch| ch != ']')
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || matches!(ch, '-' | ':' | '.') {
                    ch
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Whether the select accepts several values.
    #[must_use]
    pub const fn multiple(&self) -> bool {
        self.multiple
    }
}

/// Turns option lists into markup.
pub trait OptionRenderer {
    /// Markup for a single option.
    fn option_tag(&self, option: &OptionDescriptor) -> String;

    /// Markup for every option, one per line.
    fn option_tags(&self, list: &OptionList) -> String {
        list.iter()
            .map(|option| self.option_tag(option))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Markup for a complete select control.
    fn select_tag(&self, field: &SelectField, list: &OptionList) -> String;
}

/// HTML renderer with Rails-compatible attribute spelling.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl OptionRenderer for HtmlRenderer {
    fn option_tag(&self, option: &OptionDescriptor) -> String {
        let mut tag = String::from("<option");
        if option.selected {
            tag.push_str(r#" selected="selected""#);
        }
        if option.disabled {
            tag.push_str(r#" disabled="disabled""#);
        }
        tag.push_str(&format!(
            r#" value="{}">{}</option>"#,
            HtmlEscape(&option.code),
            HtmlEscape(&option.label)
        ));
        tag
    }

    fn select_tag(&self, field: &SelectField, list: &OptionList) -> String {
        let mut tag = format!(
            r#"<select name="{}" id="{}""#,
            HtmlEscape(&field.name()),
            HtmlEscape(&field.id())
        );
        if field.multiple() {
            tag.push_str(r#" multiple="multiple""#);
        }
        tag.push_str(">\n");
        let options = self.option_tags(list);
        if !options.is_empty() {
            tag.push_str(&options);
            tag.push('\n');
        }
        tag.push_str("</select>");
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn option(label: &str, code: &str, selected: bool, disabled: bool) -> OptionDescriptor {
        OptionDescriptor {
            label: label.to_owned(),
            code: code.to_owned(),
            selected,
            disabled,
        }
    }

    #[rstest]
    #[case(option("Japan", "JP", false, false), r#"<option value="JP">Japan</option>"#)]
    #[case(
        option("Japan", "JP", true, false),
        r#"<option selected="selected" value="JP">Japan</option>"#
    )]
    #[case(
        option("-----", "-----", false, true),
        r#"<option disabled="disabled" value="-----">-----</option>"#
    )]
    #[case(
        option("Bosnia & Herzegovina", "BA", false, false),
        r#"<option value="BA">Bosnia &amp; Herzegovina</option>"#
    )]
    fn option_tags(#[case] descriptor: OptionDescriptor, #[case] expected: &str) {
        assert_eq!(HtmlRenderer.option_tag(&descriptor), expected);
    }

    #[rstest]
    #[case("walrus[country_code]", "walrus_country_code")]
    #[case("user[address][country]", "user_address_country")]
    #[case("country", "country")]
    #[case("countries[]", "countries")]
    fn ids_derive_from_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(SelectField::new(name).id(), expected);
    }

    #[test]
    fn multiple_selects_submit_arrays() {
        let field = SelectField::new("user[countries]").with_multiple(true);
        assert_eq!(field.name(), "user[countries][]");
        assert_eq!(field.id(), "user_countries");
    }

    #[test]
    fn explicit_id_wins() {
        let field = SelectField::new("walrus[country_code]").with_id("custom");
        assert_eq!(field.id(), "custom");
    }
}
