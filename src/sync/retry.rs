use std::time::Duration;

use log::{error, info, warn};
use tokio::time::sleep;

use crate::cloud::gateway::StorageGateway;
use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_SECS};
use crate::models::{Candidate, Outcome};

/// Bounded retry with a constant delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// At least one attempt is always made.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Policy without any wait between attempts
    pub fn immediate(max_attempts: usize) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, Duration::from_secs(DEFAULT_RETRY_DELAY_SECS))
    }
}

/// Upload a candidate under its base name, retrying per `policy`.
///
/// Never returns an error: exhausting the attempts yields
/// [`Outcome::Failed`] carrying the last error.
pub async fn upload_with_retry<G>(gateway: &G, candidate: &Candidate, policy: &RetryPolicy) -> Outcome
where
    G: StorageGateway + ?Sized,
{
    let key = candidate.key();
    let mut last_error = String::new();

    for attempt in 1..=policy.max_attempts() {
        match gateway.put(&candidate.bucket, &key, &candidate.path).await {
            Ok(()) => {
                info!("Uploaded '{}' to bucket '{}'", key, candidate.bucket);
                return Outcome::Uploaded { attempts: attempt };
            }
            Err(e) => {
                warn!("Attempt {} failed for '{}': {:#}", attempt, key, e);
                last_error = format!("{:#}", e);
            }
        }

        if attempt < policy.max_attempts() && !policy.delay().is_zero() {
            sleep(policy.delay()).await;
        }
    }

    error!("Failed to upload '{}' after {} attempts", key, policy.max_attempts());
    Outcome::Failed {
        attempts: policy.max_attempts(),
        error: last_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::gateway::MockStorageGateway;
    use anyhow::anyhow;
    use mockall::Sequence;
    use std::path::Path;
    use std::time::Instant;

    fn candidate() -> Candidate {
        Candidate::new("/srv/submissions/agency1/X_Report.pdf", "bucket-1")
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        assert_eq!(RetryPolicy::immediate(0).max_attempts(), 1);
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let mut gateway = MockStorageGateway::new();
        gateway
            .expect_put()
            .withf(|bucket: &str, key: &str, path: &Path| {
                bucket == "bucket-1"
                    && key == "X_Report.pdf"
                    && path == Path::new("/srv/submissions/agency1/X_Report.pdf")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let outcome = upload_with_retry(&gateway, &candidate(), &RetryPolicy::immediate(3)).await;
        assert_eq!(outcome, Outcome::Uploaded { attempts: 1 });
    }

    #[tokio::test]
    async fn test_success_after_failure_stops_retrying() {
        let mut gateway = MockStorageGateway::new();
        let mut seq = Sequence::new();
        gateway
            .expect_put()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(anyhow!("connection reset")));
        gateway
            .expect_put()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));

        let outcome = upload_with_retry(&gateway, &candidate(), &RetryPolicy::immediate(3)).await;
        assert_eq!(outcome, Outcome::Uploaded { attempts: 2 });
    }

    #[tokio::test]
    async fn test_always_failing_makes_exactly_max_attempts() {
        let mut gateway = MockStorageGateway::new();
        gateway
            .expect_put()
            .times(4)
            .returning(|_, _, _| Err(anyhow!("timeout")));

        let outcome = upload_with_retry(&gateway, &candidate(), &RetryPolicy::immediate(4)).await;
        assert_eq!(
            outcome,
            Outcome::Failed {
                attempts: 4,
                error: "timeout".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_between_attempts_only() {
        let mut gateway = MockStorageGateway::new();
        gateway
            .expect_put()
            .times(3)
            .returning(|_, _, _| Err(anyhow!("timeout")));

        let started = tokio::time::Instant::now();
        let wall = Instant::now();
        let policy = RetryPolicy::new(3, Duration::from_secs(2));
        upload_with_retry(&gateway, &candidate(), &policy).await;

        // two waits of two seconds; none after the last attempt
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(4) && elapsed < Duration::from_secs(5));
        assert!(wall.elapsed() < Duration::from_secs(4));
    }
}
