//! CLI parsing tests and end-to-end runs of the `country-select` binary.

use anyhow::{Context, Result, ensure};
use assert_cmd::Command;
use clap::error::ErrorKind;
use country_select::cli::{Cli, Commands, OutputFormat};
use predicates::prelude::*;
use rstest::rstest;

fn country_select() -> Result<Command> {
    let mut cmd = Command::cargo_bin("country-select").context("locate country-select binary")?;
    cmd.env("COUNTRY_SELECT_LOCALE", "en");
    Ok(cmd)
}

#[rstest]
fn bare_invocation_defaults_to_options() -> Result<()> {
    let cli = Cli::try_parse_from_with_default(["country-select"])?;
    let Some(Commands::Options(args)) = cli.command else {
        anyhow::bail!("expected the options command");
    };
    ensure!(args.output == OutputFormat::Text && !args.no_sort);
    ensure!(args.divider == "---------------");
    Ok(())
}

#[rstest]
fn list_flags_accept_commas_and_repeats() -> Result<()> {
    let cli = Cli::try_parse_from_with_default([
        "country-select",
        "--locale",
        "de",
        "options",
        "--only",
        "PT,DE",
        "--only",
        "AR",
        "--no-sort",
        "-o",
        "json",
    ])?;
    ensure!(cli.locale.as_deref() == Some("de"));
    let Some(Commands::Options(args)) = cli.command else {
        anyhow::bail!("expected the options command");
    };
    ensure!(args.only == ["PT", "DE", "AR"], "got {:?}", args.only);
    let config = args.selection("de");
    ensure!(!config.sort_provided() && config.locale() == Some("de"));
    ensure!(args.output == OutputFormat::Json);
    Ok(())
}

#[rstest]
#[case(vec!["country-select", "unknowncmd"], ErrorKind::InvalidSubcommand)]
#[case(vec!["country-select", "options", "--output", "xml"], ErrorKind::InvalidValue)]
#[case(vec!["country-select", "options", "--multiple"], ErrorKind::MissingRequiredArgument)]
#[case(vec!["country-select", "lookup"], ErrorKind::MissingRequiredArgument)]
fn parse_errors(#[case] argv: Vec<&str>, #[case] expected: ErrorKind) -> Result<()> {
    let err = Cli::try_parse_from_with_default(argv)
        .err()
        .context("parsing should fail")?;
    ensure!(err.kind() == expected, "expected {expected:?}, got {:?}", err.kind());
    Ok(())
}

#[test]
fn text_output_lists_codes_and_labels() -> Result<()> {
    country_select()?
        .args(["options", "--only", "AX,AL,AF", "--selected", "AL"])
        .assert()
        .success()
        .stdout("AF\tAfghanistan\nAX\tÅland Islands\nAL\tAlbania\t[selected]\n");
    Ok(())
}

#[test]
fn json_output_includes_divider_index() -> Result<()> {
    let output = country_select()?
        .args(["options", "--priority", "US", "--only", "CA,US", "-o", "json"])
        .output()
        .context("run country-select")?;
    ensure!(output.status.success(), "command failed: {output:?}");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parse JSON output")?;
    ensure!(json["divider_index"] == 1, "got {json}");
    ensure!(json["options"][1]["disabled"] == true, "got {json}");
    ensure!(json["options"][2]["code"] == "CA", "got {json}");
    Ok(())
}

#[test]
fn html_output_wraps_named_selects() -> Result<()> {
    country_select()?
        .args([
            "--locale", "de", "options", "--only", "AT", "-o", "html", "--name",
            "user[country]",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<select name="user[country]" id="user_country">"#,
        ))
        .stdout(predicate::str::contains(
            r#"<option value="AT">Österreich</option>"#,
        ));
    Ok(())
}

#[test]
fn lookup_prints_codes_and_localized_name() -> Result<()> {
    country_select()?
        .args(["--locale", "fr", "lookup", "deu"])
        .assert()
        .success()
        .stdout("DE\tDEU\tAllemagne\n");
    Ok(())
}

#[test]
fn locale_environment_variable_sets_the_default() -> Result<()> {
    country_select()?
        .env("COUNTRY_SELECT_LOCALE", "es_ES.UTF-8")
        .args(["lookup", "US"])
        .assert()
        .success()
        .stdout("US\tUSA\tEstados Unidos\n");
    Ok(())
}

#[test]
fn locales_lists_dataset_translations() -> Result<()> {
    country_select()?
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("de\n").and(predicate::str::contains("zh-TW\n")));
    Ok(())
}

#[test]
fn unknown_country_fails_with_message_on_stderr() -> Result<()> {
    country_select()?
        .args(["options", "--only", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"))
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn custom_catalog_files_are_loaded() -> Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("countries.json");
    std::fs::write(&path, test_support::catalog::FIXTURE_DATASET).context("write dataset")?;
    country_select()?
        .arg("--catalog")
        .arg(&path)
        .args(["options", "--only", "EU", "--icons"])
        .assert()
        .success()
        .stdout("EU\tEuropean Union\n");
    Ok(())
}

#[test]
fn help_describes_the_default_command() -> Result<()> {
    country_select()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the option list (default command)"));
    Ok(())
}
