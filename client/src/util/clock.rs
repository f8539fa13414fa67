//! Wall clock and sampling entropy that work both in the browser and on the server.
//!
//! `std::time::SystemTime::now` panics on `wasm32-unknown-unknown`, so the
//! hydrate build reads `Date.now()` instead.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_millis()).ok())
            .unwrap_or(0)
    }
}

/// Small RNG seeded from the clock. Good enough for simulated metrics.
#[allow(clippy::cast_sign_loss)]
pub fn sampling_rng() -> SmallRng {
    SmallRng::seed_from_u64(now_ms() as u64)
}
