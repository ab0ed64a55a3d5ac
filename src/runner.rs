//! CLI execution and command dispatch logic.
//!
//! Keeps the binary's `main` minimal: it parses a [`Cli`], installs logging
//! and the message localizer, and hands over to [`run`].

use crate::catalog::CountryCatalog;
use crate::cli::{Cli, Commands, OptionsArgs, OutputFormat};
use crate::locale_resolution::{EnvProvider, SystemLocale, resolve_default_locale};
use crate::options::{CountrySelect, OptionList};
use crate::render::{HtmlRenderer, OptionRenderer, SelectField};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Execute the parsed [`Cli`] command, writing results to `out`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the build or lookup
/// fails, or writing to `out` fails.
pub fn run(
    cli: &Cli,
    env: &impl EnvProvider,
    system: &impl SystemLocale,
    out: &mut dyn Write,
) -> Result<()> {
    let locale = resolve_default_locale(cli.locale.as_deref(), env, system);
    debug!(locale = locale.as_str(), "resolved locale");
    let select = CountrySelect::new(Arc::new(load_catalog(cli)?)).with_default_locale(&locale);

    let command = cli
        .command
        .clone()
        .unwrap_or_else(|| Commands::Options(OptionsArgs::default()));
    match command {
        Commands::Options(args) => handle_options(&select, &args, &locale, out),
        Commands::Locales => {
            for available in select.catalog().available_locales() {
                writeln!(out, "{available}").context("write locale")?;
            }
            Ok(())
        }
        Commands::Lookup { token } => {
            let country = select.catalog().resolve(&token)?;
            writeln!(
                out,
                "{}\t{}\t{}",
                country.alpha2(),
                country.alpha3(),
                select.catalog().translated_name(country, &locale)
            )
            .context("write lookup result")?;
            Ok(())
        }
    }
}

fn load_catalog(cli: &Cli) -> Result<CountryCatalog> {
    let Some(path) = &cli.catalog else {
        return CountryCatalog::bundled().context("load bundled country dataset");
    };
    let json = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    CountryCatalog::from_json_str(&json).with_context(|| format!("load country dataset {path}"))
}

fn handle_options(
    select: &CountrySelect,
    args: &OptionsArgs,
    locale: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let list = select.build_options(&args.selection(locale))?;
    let rendered = match args.output {
        OutputFormat::Text => render_text(&list),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&list).context("serialize option list")?
        }
        OutputFormat::Html => args.name.as_deref().map_or_else(
            || HtmlRenderer.option_tags(&list),
            |name| {
                let field = SelectField::new(name).with_multiple(args.multiple);
                HtmlRenderer.select_tag(&field, &list)
            },
        ),
    };
    writeln!(out, "{rendered}").context("write option list")?;
    Ok(())
}

fn render_text(list: &OptionList) -> String {
    list.iter()
        .map(|option| {
            let mut line = format!("{}\t{}", option.code, option.label);
            if option.selected {
                line.push_str("\t[selected]");
            }
            if option.disabled {
                line.push_str("\t[disabled]");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
