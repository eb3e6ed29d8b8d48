use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Injectable time source returning epoch seconds.
///
/// Session issuance and verification take the current time as an input, so
/// tests can exercise expiry deterministically without real delays. The
/// running server holds a single `Clock::system()` in its state.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> u64 + Send + Sync>);

impl Clock {
    /// Wall-clock time.
    pub fn system() -> Self {
        Self(Arc::new(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("Time went backwards")
                .as_secs()
        }))
    }

    /// A clock frozen at `now`, for tests.
    pub fn fixed(now: u64) -> Self {
        Self(Arc::new(move || now))
    }

    pub fn now(&self) -> u64 {
        (self.0)()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clock").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_deterministic() {
        let clock = Clock::fixed(1_700_000_000);
        assert_eq!(clock.now(), 1_700_000_000);
        assert_eq!(clock.now(), 1_700_000_000);
    }

    #[test]
    fn system_clock_is_past_2023() {
        assert!(Clock::system().now() > 1_700_000_000);
    }
}
