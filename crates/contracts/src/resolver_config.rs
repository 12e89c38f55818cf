//! Resolver runtime configuration

use std::time::Duration;

/// Gesture resolver tuning
///
/// The settle window is a debounce, not a real-time deadline: it only has to
/// end before the sensor's gesture buffer clears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Lookahead settle window between the initial and second read
    pub settle: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(800),
        }
    }
}

impl ResolverConfig {
    pub fn with_settle_ms(settle_ms: u64) -> Self {
        Self {
            settle: Duration::from_millis(settle_ms),
        }
    }
}
