//! Fluent-backed rendering for error and configuration messages.
//!
//! A single process-wide [`Localizer`] renders every [`LocalizedMessage`].
//! It defaults to the embedded `en-US` bundle; binaries swap it once at
//! startup with [`install_locale`], and tests scope overrides with
//! [`set_localizer_for_tests`].
//!
//! The locale used here only affects diagnostics. Country names are
//! translated by the catalog and take their locale from each build call.

mod bundle;
pub mod keys;

pub use bundle::build_localizer;

use ortho_config::{LocalizationArgs, Localizer};
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static LOCALIZER: OnceLock<RwLock<Arc<dyn Localizer>>> = OnceLock::new();

fn storage() -> &'static RwLock<Arc<dyn Localizer>> {
    LOCALIZER.get_or_init(|| RwLock::new(Arc::from(build_localizer(None))))
}

/// Replace the process-wide localizer.
pub fn set_localizer(localizer: Arc<dyn Localizer>) {
    let mut guard = storage().write().unwrap_or_else(PoisonError::into_inner);
    *guard = localizer;
}

/// Build and install the localizer for `locale`, falling back to English.
pub fn install_locale(locale: Option<&str>) {
    set_localizer(Arc::from(build_localizer(locale)));
}

/// Returns the active localizer.
#[must_use]
pub fn localizer() -> Arc<dyn Localizer> {
    let guard = storage().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Restores the previously active localizer when dropped.
pub struct LocalizerGuard {
    previous: Arc<dyn Localizer>,
}

impl Drop for LocalizerGuard {
    fn drop(&mut self) {
        set_localizer(Arc::clone(&self.previous));
    }
}

/// Install `localizer` until the returned guard is dropped.
#[must_use]
pub fn set_localizer_for_tests(localizer: Arc<dyn Localizer>) -> LocalizerGuard {
    let previous = self::localizer();
    set_localizer(localizer);
    LocalizerGuard { previous }
}

/// A Fluent message identifier plus its named arguments, rendered lazily.
///
/// Rendering happens at `Display` time so a message created before the
/// localizer is swapped still comes out in the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedMessage {
    key: &'static str,
    args: Vec<(&'static str, String)>,
}

impl LocalizedMessage {
    /// Create a message with no arguments.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    /// Attach a named argument.
    #[must_use]
    #[expect(
        clippy::needless_pass_by_value,
        reason = "Owned values keep call sites ergonomic for temporaries."
    )]
    pub fn with_arg(mut self, name: &'static str, value: impl ToString) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    /// The Fluent identifier this message renders.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Look up the raw value supplied for argument `name`.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(arg, _)| *arg == name)
            .map(|(_, value)| value.as_str())
    }

    fn fluent_args(&self) -> Option<LocalizationArgs<'_>> {
        if self.args.is_empty() {
            return None;
        }
        let mut args = LocalizationArgs::default();
        for (name, value) in &self.args {
            args.insert(*name, value.clone().into());
        }
        Some(args)
    }
}

impl fmt::Display for LocalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.fluent_args();
        let rendered = localizer().message(self.key, args.as_ref(), self.key);
        f.write_str(&rendered)
    }
}

/// Shorthand for [`LocalizedMessage::new`].
#[must_use]
pub const fn message(key: &'static str) -> LocalizedMessage {
    LocalizedMessage::new(key)
}
