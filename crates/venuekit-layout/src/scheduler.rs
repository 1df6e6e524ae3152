//! Coalescing scheduler for debounced side effects.
//!
//! Each [`CoalescingScheduler::schedule`] call replaces the pending timer,
//! so a burst of requests runs the job once, a quiet period after the last
//! request, with the last request's job. A job that has already started is
//! never interrupted; only timers that have not fired are superseded.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use venuekit_core::SchedulerError;

#[derive(Debug)]
pub struct CoalescingScheduler {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl CoalescingScheduler {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn from_millis(quiet_ms: u64) -> Self {
        Self::new(Duration::from_millis(quiet_ms))
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Runs `job` after the quiet period unless another call supersedes it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&mut self, job: F) -> Result<(), SchedulerError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        let quiet = self.quiet;
        let timer = runtime.spawn(async move {
            tokio::time::sleep(quiet).await;
            // Detach the job so superseding this timer cannot cancel it mid-flight.
            tokio::spawn(job());
        });

        if let Some(previous) = self.pending.replace(timer) {
            previous.abort();
            tracing::trace!("Superseded pending debounced job");
        }
        Ok(())
    }

    /// True while a timer is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

impl Default for CoalescingScheduler {
    fn default() -> Self {
        Self::from_millis(venuekit_core::constants::SAVE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_without_runtime() {
        let mut scheduler = CoalescingScheduler::from_millis(10);
        assert_eq!(scheduler.schedule(|| async {}), Err(SchedulerError::NoRuntime));
        assert!(!scheduler.is_pending());
    }
}
