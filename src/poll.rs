use std::thread::sleep;
use std::time::Duration;

use tracing::warn;

use crate::{BootstrapError, Result};

/// Invoke `check` until it succeeds, waiting `retry_delay` between failed
/// attempts. Fixed interval only: no backoff, no jitter, no cancellation.
///
/// Returns the first `Ok` value immediately; after `max_attempts` failures
/// returns [`BootstrapError::ReadinessTimeout`] carrying the last error.
/// The check always runs at least once, even with `max_attempts == 0`.
pub fn wait_until_ready<T, E, F>(max_attempts: u32, retry_delay: Duration, mut check: F) -> Result<T>
where
    E: std::fmt::Display,
    F: FnMut() -> std::result::Result<T, E>,
{
    let max_attempts = max_attempts.max(1);
    let mut last_error = String::new();
    for attempt in 1..=max_attempts {
        match check() {
            Ok(value) => return Ok(value),
            Err(e) => {
                last_error = e.to_string();
                warn!(attempt, max_attempts, error = %last_error, "not ready yet");
                if attempt < max_attempts {
                    sleep(retry_delay);
                }
            }
        }
    }

    Err(BootstrapError::ReadinessTimeout {
        attempts: max_attempts,
        last_error,
    })
}
