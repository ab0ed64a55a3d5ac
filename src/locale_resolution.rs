//! Locale tag normalization, translation fallback chains, and default locale
//! detection.
//!
//! Country names are looked up per build call with an explicit locale. When a
//! caller does not supply one, the default comes from
//! [`resolve_default_locale`], which checks an explicit override, then
//! `COUNTRY_SELECT_LOCALE`, then the host locale, and finally English.

use ortho_config::LanguageIdentifier;
use std::str::FromStr;

/// Environment variable used to override the default locale.
pub const COUNTRY_SELECT_LOCALE_ENV: &str = "COUNTRY_SELECT_LOCALE";

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en";

/// Read-only environment access used for locale resolution.
pub trait EnvProvider {
    /// Fetch the environment variable value for `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Host locale provider.
pub trait SystemLocale {
    /// Return the host locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// Host locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalize a raw locale string into a canonical BCP 47 tag.
///
/// Encoding suffixes (`.UTF-8`) and modifiers (`@euro`) are dropped,
/// underscores become hyphens, and the result is validated and re-cased by
/// `LanguageIdentifier`.
///
/// # Examples
///
/// ```rust
/// use country_select::locale_resolution::normalize_locale_tag;
///
/// assert_eq!(normalize_locale_tag("de_AT.UTF-8"), Some("de-AT".to_string()));
/// assert_eq!(normalize_locale_tag("zh-hant-tw"), Some("zh-Hant-TW".to_string()));
/// assert_eq!(normalize_locale_tag("not a locale"), None);
/// ```
#[must_use]
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    parse_locale(raw).map(|lang| lang.to_string())
}

fn parse_locale(raw: &str) -> Option<LanguageIdentifier> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty()
        || stripped.eq_ignore_ascii_case("C")
        || stripped.eq_ignore_ascii_case("POSIX")
    {
        return None;
    }
    LanguageIdentifier::from_str(&stripped.replace('_', "-")).ok()
}

/// Candidate locales to try, most specific first, when translating into
/// `locale`.
///
/// A region-qualified tag falls back to its script-qualified form, then to
/// language plus region, then to the bare language. Invalid input yields an
/// empty chain so callers fall straight through to the canonical name.
///
/// # Examples
///
/// ```rust
/// use country_select::locale_resolution::fallback_chain;
///
/// assert_eq!(fallback_chain("de-AT"), vec!["de-AT", "de"]);
/// assert_eq!(
///     fallback_chain("zh-Hant-TW"),
///     vec!["zh-Hant-TW", "zh-Hant", "zh-TW", "zh"],
/// );
/// assert!(fallback_chain("").is_empty());
/// ```
#[must_use]
pub fn fallback_chain(locale: &str) -> Vec<String> {
    let Some(lang) = parse_locale(locale) else {
        return Vec::new();
    };
    let language = lang.language.as_str();
    let script = lang.script.as_ref().map(|script| script.as_str());
    let region = lang.region.as_ref().map(|region| region.as_str());

    let mut chain = vec![lang.to_string()];
    if let Some(script_tag) = script {
        chain.push(format!("{language}-{script_tag}"));
    }
    if let (Some(_), Some(region_tag)) = (script, region) {
        chain.push(format!("{language}-{region_tag}"));
    }
    chain.push(language.to_owned());
    chain.dedup();
    chain
}

/// Resolve the locale used when a build call does not name one.
///
/// Precedence is `explicit`, then `COUNTRY_SELECT_LOCALE`, then the host
/// locale. Each candidate is normalized and invalid ones are skipped; when
/// none survive, [`DEFAULT_LOCALE`] is returned.
///
/// # Examples
///
/// ```rust
/// use country_select::locale_resolution::{resolve_default_locale, EnvProvider, SystemLocale};
///
/// struct NoEnv;
/// impl EnvProvider for NoEnv {
///     fn var(&self, _key: &str) -> Option<String> {
///         None
///     }
/// }
///
/// struct Host(&'static str);
/// impl SystemLocale for Host {
///     fn system_locale(&self) -> Option<String> {
///         Some(self.0.to_owned())
///     }
/// }
///
/// assert_eq!(resolve_default_locale(None, &NoEnv, &Host("fr_FR.UTF-8")), "fr-FR");
/// assert_eq!(resolve_default_locale(Some("es"), &NoEnv, &Host("fr_FR")), "es");
/// assert_eq!(resolve_default_locale(None, &NoEnv, &Host("C")), "en");
/// ```
#[must_use]
pub fn resolve_default_locale(
    explicit: Option<&str>,
    env: &impl EnvProvider,
    system: &impl SystemLocale,
) -> String {
    let env_locale = env.var(COUNTRY_SELECT_LOCALE_ENV);
    let system_locale = system.system_locale();
    [explicit, env_locale.as_deref(), system_locale.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_locale_tag)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
}
