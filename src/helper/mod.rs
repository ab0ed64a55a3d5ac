//! `MiniJinja` integration: option lists, complete select controls, and a
//! name filter.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use country_select::{CountrySelect, helper};
//! use minijinja::Environment;
//!
//! let mut env = Environment::new();
//! helper::register(&mut env, Arc::new(CountrySelect::bundled().expect("catalog")));
//! let rendered = env
//!     .render_str(
//!         "{{ country_select('user[country]', only=['DE', 'AT'], selected='AT') }}",
//!         (),
//!     )
//!     .expect("render");
//! assert!(rendered.contains(r#"<option selected="selected" value="AT">Austria</option>"#));
//! ```

mod options;

use std::sync::Arc;

use minijinja::{
    Environment, Error, ErrorKind,
    value::{Kwargs, Rest, Value},
};

use crate::error::CountrySelectError;
use crate::localization::{self, LocalizedMessage, keys};
use crate::options::CountrySelect;
use crate::render::{HtmlRenderer, OptionRenderer, SelectField};

use options::{flag, selection_from_kwargs, string};

/// Register the `country_options` and `country_select` functions and the
/// `country_name` filter, all backed by `select`.
///
/// * `country_options(**options)` returns a list of
///   `{label, code, selected, disabled}` maps.
/// * `country_select(name, id=None, multiple=false, **options)` returns the
///   markup of a `<select>` control.
/// * `code | country_name(locale=None)` translates a code or name.
///
/// Options match [`SelectionConfig`](crate::SelectionConfig):
/// `locale`, `priority_countries`, `priority_countries_divider`, `only`,
/// `except`, `selected`, `disabled`, `format`, `sort_provided`, `icons`.
/// List options also accept a single string. Positional options and unknown
/// keywords are errors.
pub fn register(env: &mut Environment<'_>, select: Arc<CountrySelect>) {
    {
        let select = Arc::clone(&select);
        env.add_function(
            "country_options",
            move |args: Rest<Value>, kwargs: Kwargs| {
                reject_positional(args.len())?;
                country_options(&select, &kwargs)
            },
        );
    }
    {
        let select = Arc::clone(&select);
        env.add_function(
            "country_select",
            move |args: Rest<Value>, kwargs: Kwargs| {
                let (name, rest) = args.split_first().ok_or_else(missing_field_name)?;
                reject_positional(rest.len())?;
                country_select(&select, name, &kwargs)
            },
        );
    }
    env.add_filter(
        "country_name",
        move |token: String, locale: Option<String>| -> Result<String, Error> {
            let country = select.catalog().resolve(&token).map_err(template_error)?;
            let locale = locale.as_deref().unwrap_or_else(|| select.default_locale());
            Ok(select.catalog().translated_name(country, locale))
        },
    );
}

fn country_options(select: &CountrySelect, kwargs: &Kwargs) -> Result<Value, Error> {
    let config = selection_from_kwargs(kwargs)?;
    kwargs.assert_all_used()?;
    let list = select.build_options(&config).map_err(template_error)?;
    Ok(Value::from_serialize(list.options()))
}

fn country_select(select: &CountrySelect, name: &Value, kwargs: &Kwargs) -> Result<Value, Error> {
    let field_name = name
        .as_str()
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .ok_or_else(missing_field_name)?;
    let mut field = SelectField::new(field_name);
    if let Some(id) = string(kwargs, "id")? {
        field = field.with_id(id);
    }
    if let Some(multiple) = flag(kwargs, "multiple")? {
        field = field.with_multiple(multiple);
    }
    let config = selection_from_kwargs(kwargs)?;
    kwargs.assert_all_used()?;
    let list = select.build_options(&config).map_err(template_error)?;
    Ok(Value::from_safe_string(
        HtmlRenderer.select_tag(&field, &list),
    ))
}

fn reject_positional(count: usize) -> Result<(), Error> {
    if count == 0 {
        return Ok(());
    }
    Err(config_error(
        localization::message(keys::CONFIG_POSITIONAL_OPTIONS).with_arg("count", count),
    ))
}

fn missing_field_name() -> Error {
    config_error(localization::message(keys::CONFIG_MISSING_FIELD_NAME))
}

fn config_error(details: LocalizedMessage) -> Error {
    template_error(CountrySelectError::invalid_configuration(details))
}

fn template_error(err: CountrySelectError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}
