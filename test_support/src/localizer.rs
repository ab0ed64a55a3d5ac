//! Test helpers for localizer configuration.

use country_select::localization::{self, LocalizerGuard};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Mutex used to serialize process-wide localizer mutations in tests.
pub static LOCALIZER_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquire the global localizer test lock.
///
/// A poisoned lock is recovered; the guarded state is the localizer itself,
/// which each test reinstalls.
pub fn localizer_test_lock() -> MutexGuard<'static, ()> {
    LOCALIZER_TEST_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Install the localizer for `locale` until the guard is dropped.
pub fn set_localizer(locale: &str) -> LocalizerGuard {
    let localizer = localization::build_localizer(Some(locale));
    localization::set_localizer_for_tests(Arc::from(localizer))
}

/// Install the English localizer for tests.
pub fn set_en_localizer() -> LocalizerGuard {
    set_localizer("en-US")
}
