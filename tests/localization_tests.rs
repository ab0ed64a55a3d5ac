//! Tests covering localized error messages and fallback behaviour.

use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use country_select::{CountrySelectError, SelectionConfig, helper};
use miette::Diagnostic;
use minijinja::Environment;
use rstest::rstest;
use test_support::fixture_select;
use test_support::fluent::strip_isolates;
use test_support::localizer::{localizer_test_lock, set_en_localizer, set_localizer};

fn not_found() -> Result<CountrySelectError> {
    fixture_select()
        .build_options(&SelectionConfig::default().with_only(["Atlantis"]))
        .err()
        .context("build should fail")
}

#[rstest]
fn english_messages_name_the_token() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_en_localizer();
    let message = strip_isolates(&not_found()?.to_string());
    ensure!(
        message == "Could not find Country with string 'Atlantis'",
        "unexpected message: {message}"
    );
    Ok(())
}

#[rstest]
fn spanish_messages_are_used_when_installed() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_localizer("es-ES");
    let message = strip_isolates(&not_found()?.to_string());
    ensure!(
        message == "No se encontró ningún país con la cadena 'Atlantis'",
        "expected Spanish translation, got: {message}"
    );
    Ok(())
}

#[rstest]
#[case("fr-FR")]
#[case("not a locale")]
fn unknown_locales_fall_back_to_english(#[case] locale: &str) -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_localizer(locale);
    let message = not_found()?.to_string();
    ensure!(
        message.contains("Could not find Country"),
        "expected English fallback, got: {message}"
    );
    Ok(())
}

#[rstest]
fn messages_render_in_the_language_active_at_display_time() -> Result<()> {
    let _lock = localizer_test_lock();
    let err = {
        let _guard = set_en_localizer();
        not_found()?
    };
    let _guard = set_localizer("es-ES");
    ensure!(
        err.to_string().contains("No se encontró"),
        "message should follow the active localizer: {err}"
    );
    Ok(())
}

#[rstest]
fn configuration_errors_wrap_their_details() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_en_localizer();
    let err = fixture_select()
        .build_options(&SelectionConfig::default().with_format("fancy"))
        .err()
        .context("build should fail")?;
    let message = strip_isolates(&err.to_string());
    ensure!(
        message == "Invalid country select configuration: unknown format 'fancy' \
                    (known formats: default, with_alpha2, alpha3)",
        "unexpected message: {message}"
    );
    let code = err.code().map(|code| code.to_string());
    ensure!(
        code.as_deref() == Some("country_select::invalid_configuration"),
        "unexpected diagnostic code {code:?}"
    );
    Ok(())
}

#[rstest]
fn not_found_diagnostics_carry_help() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_en_localizer();
    let err = not_found()?;
    let help = err.help().map(|help| help.to_string()).unwrap_or_default();
    ensure!(help.contains("alpha-2"), "unexpected help: {help}");
    Ok(())
}

#[rstest]
#[case("en-US", "icons='yes'", "option 'icons' expects a boolean")]
#[case("es-ES", "icons='yes'", "la opción 'icons' espera un valor booleano")]
#[case("es-ES", "format=true", "la opción 'format' espera una cadena")]
#[case("es-ES", "only=3", "espera una cadena o una lista de cadenas")]
fn template_type_errors_are_fully_translated(
    #[case] locale: &str,
    #[case] kwargs: &str,
    #[case] expected: &str,
) -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = set_localizer(locale);
    let mut env = Environment::new();
    helper::register(&mut env, Arc::new(fixture_select()));
    let Err(err) = env.render_str(&format!("{{{{ country_options({kwargs}) }}}}"), ()) else {
        anyhow::bail!("render should fail");
    };
    let message = strip_isolates(&err.to_string());
    ensure!(message.contains(expected), "unexpected message: {message}");
    Ok(())
}
