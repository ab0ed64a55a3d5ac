//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use country_select::locale_resolution::{SysLocale, SystemEnv, resolve_default_locale};
use country_select::{cli::Cli, localization, runner};
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let cli = Cli::parse_with_default();
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt().with_max_level(max_level).with_writer(io::stderr).init();
    localization::install_locale(Some(&resolve_default_locale(
        cli.locale.as_deref(),
        &SystemEnv,
        &SysLocale,
    )));
    match runner::run(&cli, &SystemEnv, &SysLocale, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "country-select failed");
            ExitCode::FAILURE
        }
    }
}
