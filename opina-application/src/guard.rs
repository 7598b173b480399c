use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Re-entrancy guard of the submission workflow.
///
/// At most one submission may be in flight at a time. An acquisition older
/// than `timeout` is treated as free again, so a hung store call cannot
/// permanently wedge the form.
#[derive(Debug)]
pub struct SubmissionGuard {
    acquired_at: Mutex<Option<Instant>>,
    timeout: Duration,
}

impl SubmissionGuard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            acquired_at: Mutex::new(None),
            timeout,
        }
    }

    /// Returns `false` while another submission is in flight.
    pub fn try_acquire(&self) -> bool {
        let mut acquired_at = self
            .acquired_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match *acquired_at {
            Some(at) if at.elapsed() < self.timeout => false,
            _ => {
                *acquired_at = Some(Instant::now());
                true
            }
        }
    }

    pub fn release(&self) {
        *self
            .acquired_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_while_acquired() {
        let guard = SubmissionGuard::new(Duration::from_secs(60));
        assert!(guard.try_acquire());
        assert!(!guard.try_acquire());
        guard.release();
        assert!(guard.try_acquire());
    }

    #[test]
    fn stale_acquisition_expires() {
        let guard = SubmissionGuard::new(Duration::ZERO);
        assert!(guard.try_acquire());
        // The zero timeout has already elapsed.
        assert!(guard.try_acquire());
    }
}
