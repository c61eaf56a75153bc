//! Process-wide animation speed multiplier.
//!
//! Views that pace their animations scale every delay by this value.
//! It never changes the order of combat steps or their outcome, only
//! the wall-clock gap between them. `0.0` means "no delay at all".

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

// f64 bits of 1.0
static RATE_BITS: AtomicU64 = AtomicU64::new(0x3FF0_0000_0000_0000);

/// Global speed multiplier for paced views.
pub struct SpeedRate;

impl SpeedRate {
    /// Set the multiplier. Negative or non-finite values clamp to `0.0`.
    pub fn set(multiplier: f64) {
        let clamped = if multiplier.is_finite() { multiplier.max(0.0) } else { 0.0 };
        RATE_BITS.store(clamped.to_bits(), Ordering::Relaxed);
    }

    /// Current multiplier.
    #[must_use]
    pub fn get() -> f64 {
        f64::from_bits(RATE_BITS.load(Ordering::Relaxed))
    }

    /// Scale a base delay by the current multiplier, saturating at
    /// `Duration::MAX`.
    #[must_use]
    pub fn scale(base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() * Self::get()).unwrap_or(Duration::MAX)
    }
}
