use crate::probe::MetadataTransport;
use std::time::Duration;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{debug, warn};

/// Maximum number of metadata requests per confirmation. Fixed invariant of
/// this subsystem, not runtime configuration.
pub const MAX_ATTEMPTS: u32 = 3;

/// Fixed wait between attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Upgrades a heuristic match into a confirmed decision by probing the
/// metadata endpoint under a bounded retry budget.
pub struct ConfirmationProber<T: MetadataTransport> {
    transport: T,
}

impl<T: MetadataTransport> ConfirmationProber<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Probe the metadata endpoint, honouring `deadline`.
    ///
    /// Returns true only for an HTTP 200 within the attempt budget. Every
    /// failure mode resolves to false - a detection failure must never be
    /// mistaken for a positive identification. Cancellation is observed
    /// before the first attempt and during every retry wait; an in-flight
    /// request is bounded by the transport's own timeout.
    pub async fn confirm(&self, deadline: Instant) -> bool {
        // give up if the deadline already passed
        if Instant::now() >= deadline {
            debug!("confirmation skipped, deadline already expired");
            return false;
        }

        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                // fixed wait, abandoned early if the deadline fires mid-wait
                if timeout_at(deadline, sleep(RETRY_DELAY)).await.is_err() {
                    debug!("confirmation abandoned during retry wait");
                    return false;
                }
            }

            match self.transport.fetch_ami_id_status().await {
                // any HTTP response ends the loop; only a 200 confirms
                Ok(status) => {
                    debug!(
                        "metadata endpoint answered {} on attempt {}",
                        status, attempt
                    );
                    return status == 200;
                }
                Err(e) if !e.is_retryable() => {
                    warn!("metadata request could not be constructed: {}", e);
                    return false;
                }
                Err(e) => {
                    if attempt == MAX_ATTEMPTS {
                        warn!(
                            "metadata endpoint unreachable after {} attempts: {}",
                            attempt, e
                        );
                    } else {
                        debug!(
                            "metadata attempt {} failed, retrying in {:?}: {}",
                            attempt, RETRY_DELAY, e
                        );
                    }
                }
            }
        }

        false
    }
}
