//! Runtime-toggleable precondition checking.
//!
//! Tensor operations guard their preconditions (matching shapes for
//! arithmetic, a non-empty shape before chained indexing) through this
//! module. Checking defaults to on; [`set_enabled`] switches it for the
//! whole process, so the same contract can be exercised in both modes
//! without recompiling. A violated precondition with checking enabled is
//! fatal: the offending call panics with a diagnostic naming the
//! condition. With checking disabled the condition is not evaluated at
//! all and the operation's behavior is unspecified.

use std::sync::atomic::{AtomicBool, Ordering};

static CHECKS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enable or disable precondition checking process-wide.
///
/// # Examples
///
/// ```
/// use rowten_core::checks;
///
/// assert!(checks::enabled());
/// checks::set_enabled(false);
/// assert!(!checks::enabled());
/// checks::set_enabled(true);
/// ```
pub fn set_enabled(enabled: bool) {
    CHECKS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether precondition checking is currently enabled.
pub fn enabled() -> bool {
    CHECKS_ENABLED.load(Ordering::Relaxed)
}

/// Panic with a diagnostic if `condition` is false and checking is enabled.
///
/// The message closure is only invoked on failure.
pub(crate) fn require<F>(condition: bool, describe: F)
where
    F: FnOnce() -> String,
{
    if !condition && enabled() {
        panic!("precondition violated: {}", describe());
    }
}
