// llcnfc-rs/llcnfc/src/utils/timeout.rs

//! Millisecond helpers for timer configuration.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Number of whole ticks of `resolution` needed to cover `timeout`
/// (rounded up). Zero resolution yields zero ticks.
pub fn ticks_for(timeout: Duration, resolution: Duration) -> u64 {
    let res = resolution.as_millis() as u64;
    if res == 0 {
        return 0;
    }
    (timeout.as_millis() as u64).div_ceil(res)
}
