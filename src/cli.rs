//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. `options`
//! runs when no subcommand is given.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::options::{DEFAULT_DIVIDER, SelectionConfig};

/// Build localized country option lists for HTML select controls.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Locale for country names and messages (defaults to
    /// `COUNTRY_SELECT_LOCALE`, then the system locale).
    #[arg(short, long, global = true, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Load countries from this JSON dataset instead of the bundled one.
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<Utf8PathBuf>,

    /// Enable verbose logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Optional subcommand to execute; defaults to `options` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments, providing `options` as the default
    /// command.
    #[must_use]
    pub fn parse_with_default() -> Self {
        Self::parse().with_default_command()
    }

    /// Parse the provided arguments, applying the default command when
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns the clap error when parsing fails.
    pub fn try_parse_from_with_default<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::with_default_command)
    }

    /// Apply the default command if none was specified.
    #[must_use]
    fn with_default_command(mut self) -> Self {
        if self.command.is_none() {
            self.command = Some(Commands::Options(OptionsArgs::default()));
        }
        self
    }
}

/// How the `options` command prints its result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated `code` and `label` per line.
    #[default]
    Text,
    /// The option list as JSON.
    Json,
    /// `<option>` tags, wrapped in a `<select>` when `--name` is given.
    Html,
}

/// Arguments accepted by the `options` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct OptionsArgs {
    /// Restrict the list to these codes or names.
    #[arg(long, value_name = "COUNTRY", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Exclude these codes or names.
    #[arg(long, value_name = "COUNTRY", value_delimiter = ',')]
    pub except: Vec<String>,

    /// Countries listed first, above a divider.
    #[arg(short, long, value_name = "COUNTRY", value_delimiter = ',')]
    pub priority: Vec<String>,

    /// Divider label between priority and remaining countries.
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_DIVIDER)]
    pub divider: String,

    /// Registered formatter used for labels.
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub format: String,

    /// Keep `--only` and `--priority` in the order given.
    #[arg(long)]
    pub no_sort: bool,

    /// Append flag glyphs to labels.
    #[arg(long)]
    pub icons: bool,

    /// Values to mark selected.
    #[arg(short, long, value_name = "CODE", value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Values to mark disabled.
    #[arg(short, long, value_name = "CODE", value_delimiter = ',')]
    pub disabled: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Field name; with `--output html` wraps the options in a `<select>`.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Render a multiple select.
    #[arg(long, requires = "name")]
    pub multiple: bool,
}

impl Default for OptionsArgs {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            except: Vec::new(),
            priority: Vec::new(),
            divider: DEFAULT_DIVIDER.to_owned(),
            format: crate::formats::DEFAULT_FORMAT.to_owned(),
            no_sort: false,
            icons: false,
            selected: Vec::new(),
            disabled: Vec::new(),
            output: OutputFormat::Text,
            name: None,
            multiple: false,
        }
    }
}

impl OptionsArgs {
    /// Translate the flags into a build configuration.
    #[must_use]
    pub fn selection(&self, locale: &str) -> SelectionConfig {
        SelectionConfig::default()
            .with_locale(locale)
            .with_only(self.only.iter().cloned())
            .with_except(self.except.iter().cloned())
            .with_priority_countries(self.priority.iter().cloned())
            .with_divider(self.divider.as_str())
            .with_format(self.format.as_str())
            .with_sort_provided(!self.no_sort)
            .with_icons(self.icons)
            .with_selected(self.selected.iter().cloned())
            .with_disabled(self.disabled.iter().cloned())
    }
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Print the option list (default command).
    Options(OptionsArgs),

    /// List locales with translated country names.
    Locales,

    /// Resolve a code or name and print its codes and localized name.
    Lookup {
        /// Alpha-2 code, alpha-3 code, or country name.
        #[arg(value_name = "COUNTRY")]
        token: String,
    },
}
