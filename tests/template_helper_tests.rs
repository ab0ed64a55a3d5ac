//! Integration tests for the `MiniJinja` helpers.

use std::sync::Arc;

use anyhow::{Result, ensure};
use country_select::helper;
use minijinja::{Environment, context};
use rstest::{fixture, rstest};
use test_support::{fixture_select, fluent::strip_isolates};

#[fixture]
fn env() -> Environment<'static> {
    let mut env = Environment::new();
    helper::register(&mut env, Arc::new(fixture_select()));
    env
}

#[rstest]
fn select_tag_renders_priority_divider_and_selection(env: Environment<'static>) -> Result<()> {
    let rendered = env.render_str(
        "{{ country_select('walrus[country_code]', only=['DE', 'US'], \
         priority_countries='US', selected='US') }}",
        (),
    )?;
    let expected = concat!(
        r#"<select name="walrus[country_code]" id="walrus_country_code">"#,
        "\n",
        r#"<option selected="selected" value="US">United States</option>"#,
        "\n",
        r#"<option disabled="disabled" value="---------------">---------------</option>"#,
        "\n",
        r#"<option value="DE">Germany</option>"#,
        "\n",
        r#"<option value="US">United States</option>"#,
        "\n",
        "</select>",
    );
    ensure!(rendered == expected, "unexpected markup:\n{rendered}");
    Ok(())
}

#[rstest]
fn multiple_selects_accept_lists_of_selected_values(env: Environment<'static>) -> Result<()> {
    let rendered = env.render_str(
        "{{ country_select('user[countries]', multiple=true, id='picker', \
         only=['AR', 'PT', 'DE'], selected=['PT', 'AR']) }}",
        (),
    )?;
    ensure!(
        rendered.starts_with(
            r#"<select name="user[countries][]" id="picker" multiple="multiple">"#
        ),
        "unexpected opening tag: {rendered}"
    );
    ensure!(rendered.matches(r#"selected="selected""#).count() == 2, "{rendered}");
    Ok(())
}

#[rstest]
fn template_variables_drive_options(env: Environment<'static>) -> Result<()> {
    let rendered = env.render_str(
        "{% for o in country_options(locale=locale, only=only, sort_provided=false) %}\
         {{ o.label }};{% endfor %}",
        context! { locale => "de", only => vec!["US", "DE"] },
    )?;
    ensure!(rendered == "Vereinigte Staaten;Deutschland;", "got {rendered}");
    Ok(())
}

#[rstest]
#[case("{{ 'KR' | country_name('zh-TW') }}", "南韓")]
#[case("{{ 'Deutschland' | country_name }}", "Germany")]
#[case("{{ 'usa' | country_name('es-MX') }}", "Estados Unidos")]
fn country_name_filter(
    env: Environment<'static>,
    #[case] template: &str,
    #[case] expected: &str,
) -> Result<()> {
    let rendered = env.render_str(template, ())?;
    ensure!(rendered == expected, "expected {expected}, got {rendered}");
    Ok(())
}

#[rstest]
fn errors_surface_localized_messages(env: Environment<'static>) -> Result<()> {
    let Err(err) = env.render_str("{{ country_options(only=['South Korea']) }}", ()) else {
        anyhow::bail!("render should fail");
    };
    let message = strip_isolates(&err.to_string());
    ensure!(message.contains("South Korea"), "unexpected error: {message}");
    Ok(())
}

#[rstest]
fn legacy_positional_priority_list_is_rejected(env: Environment<'static>) -> Result<()> {
    let result = env.render_str("{{ country_select('country', ['US', 'DE']) }}", ());
    ensure!(result.is_err(), "positional options should be rejected");
    Ok(())
}
