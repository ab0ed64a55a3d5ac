use minijinja::{
    Error,
    value::{Kwargs, Value, ValueKind},
};

use crate::localization::{self, keys};
use crate::options::SelectionConfig;

use super::config_error;

/// Value shapes named in type errors; the message bundle translates each
/// token.
#[derive(Debug, Clone, Copy)]
enum Expected {
    Boolean,
    String,
    StringList,
}

impl Expected {
    const fn token(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::StringList => "string-list",
        }
    }
}

/// Build a [`SelectionConfig`] from template keyword arguments.
pub(super) fn selection_from_kwargs(kwargs: &Kwargs) -> Result<SelectionConfig, Error> {
    let mut config = SelectionConfig::default();
    if let Some(locale) = string(kwargs, "locale")? {
        config = config.with_locale(locale);
    }
    if let Some(priority) = string_list(kwargs, "priority_countries")? {
        config = config.with_priority_countries(priority);
    }
    if let Some(divider) = string(kwargs, "priority_countries_divider")? {
        config = config.with_divider(divider);
    }
    if let Some(only) = string_list(kwargs, "only")? {
        config = config.with_only(only);
    }
    if let Some(except) = string_list(kwargs, "except")? {
        config = config.with_except(except);
    }
    if let Some(selected) = string_list(kwargs, "selected")? {
        config = config.with_selected(selected);
    }
    if let Some(disabled) = string_list(kwargs, "disabled")? {
        config = config.with_disabled(disabled);
    }
    if let Some(format) = string(kwargs, "format")? {
        config = config.with_format(format);
    }
    if let Some(sort_provided) = flag(kwargs, "sort_provided")? {
        config = config.with_sort_provided(sort_provided);
    }
    if let Some(icons) = flag(kwargs, "icons")? {
        config = config.with_icons(icons);
    }
    Ok(config)
}

pub(super) fn flag(kwargs: &Kwargs, key: &'static str) -> Result<Option<bool>, Error> {
    match kwargs.get::<Option<Value>>(key)? {
        None => Ok(None),
        Some(value) if value.kind() == ValueKind::Bool => Ok(Some(value.is_true())),
        Some(_) => Err(invalid_value(key, Expected::Boolean)),
    }
}

pub(super) fn string(kwargs: &Kwargs, key: &'static str) -> Result<Option<String>, Error> {
    match kwargs.get::<Option<Value>>(key)? {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|text| Some(text.to_owned()))
            .ok_or_else(|| invalid_value(key, Expected::String)),
    }
}

/// Accept either a single string or a sequence of strings.
fn string_list(kwargs: &Kwargs, key: &'static str) -> Result<Option<Vec<String>>, Error> {
    let Some(value) = kwargs.get::<Option<Value>>(key)? else {
        return Ok(None);
    };
    if let Some(single) = value.as_str() {
        return Ok(Some(vec![single.to_owned()]));
    }
    if value.kind() != ValueKind::Seq {
        return Err(invalid_value(key, Expected::StringList));
    }
    value
        .try_iter()?
        .map(|item| {
            item.as_str()
                .map(ToOwned::to_owned)
                .ok_or_else(|| invalid_value(key, Expected::StringList))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn invalid_value(option: &str, expected: Expected) -> Error {
    config_error(
        localization::message(keys::CONFIG_INVALID_VALUE)
            .with_arg("option", option)
            .with_arg("expected", expected.token()),
    )
}
