use std::{future::Future, time::Duration};

use tokio_util::sync::CancellationToken;

use crate::{
    collab::ProgressSink,
    foundation::error::{FractalError, FractalResult},
};

/// Fixed-interval, bounded polling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Longest the loop can wait in total, excluding probe latency.
    pub fn budget(&self) -> Duration {
        self.interval.saturating_mul(self.max_attempts)
    }
}

/// Result of one probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollStatus<T> {
    Pending,
    Ready(T),
}

/// Call `probe` until it reports [`PollStatus::Ready`].
///
/// Each attempt waits `policy.interval` first, then probes. Both the wait and the
/// probe race against `cancel`. A status line is reported before every attempt.
/// Gives up with [`FractalError::Timeout`] after `policy.max_attempts` pending probes;
/// a probe error ends the loop immediately.
pub async fn poll_until<T, F, Fut>(
    policy: PollPolicy,
    cancel: &CancellationToken,
    progress: &dyn ProgressSink,
    mut probe: F,
) -> FractalResult<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = FractalResult<PollStatus<T>>>,
{
    for attempt in 1..=policy.max_attempts {
        progress.report(&format!(
            "Waiting for render (attempt {attempt}/{})...",
            policy.max_attempts
        ));
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FractalError::Cancelled),
            _ = tokio::time::sleep(policy.interval) => {}
        }

        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FractalError::Cancelled),
            status = probe(attempt) => status?,
        };
        if let PollStatus::Ready(value) = status {
            tracing::debug!(attempt, "poll ready");
            return Ok(value);
        }
        tracing::debug!(attempt, "poll pending");
    }
    Err(FractalError::Timeout {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/collab/poll.rs"]
mod tests;
