//! Normative limits of the IEC 60853-2 method.
//!
//! These bound the validated range of the method itself, so they are constants
//! rather than configuration.

use uom::si::{f64::Time, time::second};

/// Largest ratio of emergency to initial current the method is validated for.
pub const MAX_SCALING_FACTOR: f64 = 2.5;

/// Shortest emergency duration, in seconds (ten minutes).
pub(super) const MIN_DURATION_SECONDS: f64 = 600.0;

/// Shortest emergency duration the method applies to.
#[must_use]
pub fn min_duration() -> Time {
    Time::new::<second>(MIN_DURATION_SECONDS)
}

/// Returns `true` if `scaling_factor` lies within the IEC applicability ceiling.
///
/// The ceiling itself is compliant.
#[must_use]
pub fn is_within_iec_limit(scaling_factor: f64) -> bool {
    scaling_factor <= MAX_SCALING_FACTOR
}
