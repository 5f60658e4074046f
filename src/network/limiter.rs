//! Admission control
//!
//! Caps the number of live connections. The counter has its own lock,
//! separate from the store's.

use std::sync::Arc;

use parking_lot::Mutex;

/// Counts live connections against a fixed maximum
#[derive(Debug)]
pub struct ConnectionLimiter {
    active: Mutex<usize>,
    max: usize,
}

impl ConnectionLimiter {
    /// Create a limiter admitting at most `max` connections at once
    pub fn new(max: usize) -> Arc<Self> {
        Arc::new(Self {
            active: Mutex::new(0),
            max,
        })
    }

    /// Claim a slot if one is free
    ///
    /// The slot is released when the returned permit is dropped.
    pub fn try_acquire(self: &Arc<Self>) -> Option<ConnectionPermit> {
        let mut active = self.active.lock();
        if *active >= self.max {
            return None;
        }
        *active += 1;

        Some(ConnectionPermit {
            limiter: Arc::clone(self),
        })
    }

    /// Number of slots currently held
    pub fn active(&self) -> usize {
        *self.active.lock()
    }

    /// Configured maximum
    pub fn max(&self) -> usize {
        self.max
    }
}

/// A held connection slot
#[derive(Debug)]
pub struct ConnectionPermit {
    limiter: Arc<ConnectionLimiter>,
}

impl Drop for ConnectionPermit {
    fn drop(&mut self) {
        let mut active = self.limiter.active.lock();
        *active = active.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_past_max_and_releases_on_drop() {
        let limiter = ConnectionLimiter::new(2);

        let first = limiter.try_acquire().unwrap();
        let _second = limiter.try_acquire().unwrap();
        assert!(limiter.try_acquire().is_none());
        assert_eq!(limiter.active(), 2);

        drop(first);
        assert_eq!(limiter.active(), 1);
        assert!(limiter.try_acquire().is_some());
        // The temporary permit above was dropped immediately
        assert_eq!(limiter.active(), 1);
    }

    #[test]
    fn test_zero_max_admits_nobody() {
        let limiter = ConnectionLimiter::new(0);
        assert!(limiter.try_acquire().is_none());
        assert_eq!(limiter.active(), 0);
    }

    #[test]
    fn test_permit_released_during_unwind() {
        let limiter = ConnectionLimiter::new(1);
        let permit = limiter.try_acquire().unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _permit = permit;
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(limiter.active(), 0);
    }
}
