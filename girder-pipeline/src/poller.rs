//! Job completion poller
//!
//! Watches a submitted job by querying its retcode field on a fixed
//! interval until it reaches a terminal state or the attempt budget runs
//! out. The external system offers no push notification; a pull-based
//! status query is the only observation channel, so the poller trades
//! latency for a strict, caller-supplied polling budget.

use girder_core::domain::job::{CompletionStatus, JobId, PollPolicy};
use girder_zowe::ClientError;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::gateway::StatusSource;

/// Why a completion watch ended without success
#[derive(Debug, Error)]
pub enum PollError {
    /// The attempt budget ran out before the job finished
    #[error("{job_id} timed out after {attempts} status check(s)")]
    Timeout { job_id: JobId, attempts: u32 },

    /// The job finished with a return code above the tolerated maximum
    #[error(
        "{job_id} had a return code of {observed}, exceeding maximum allowable return code of {allowed}"
    )]
    ReturnCodeExceeded {
        job_id: JobId,
        observed: i32,
        allowed: i32,
    },

    /// The status field matched neither "null" nor a label/code pair
    #[error("{job_id} reported unrecognized status '{raw}'")]
    UnrecognizedStatus { job_id: JobId, raw: String },

    /// The status query itself failed
    #[error(transparent)]
    Query(#[from] ClientError),
}

/// Waits for a job to finish within the policy's attempt budget.
///
/// Sleeps one interval before every query, so a job is never queried at the
/// instant of submission and a zero-attempt policy issues no query at all.
/// With a budget of N and a job that never finishes, exactly N queries are
/// made. Succeeds when the observed return code is at or below the policy's
/// inclusive ceiling.
///
/// The sleep is a suspension point for the whole pipeline; nothing else is
/// in flight while a watch is active.
pub async fn await_completion(
    source: &dyn StatusSource,
    job_id: &JobId,
    policy: &PollPolicy,
) -> Result<(), PollError> {
    for attempt in 1..=policy.max_attempts {
        sleep(policy.interval).await;

        let raw = source.fetch_retcode(job_id).await?;
        match CompletionStatus::parse(&raw) {
            Ok(CompletionStatus::Pending) => {
                debug!(
                    "attempt {}/{}: {} not finished yet",
                    attempt, policy.max_attempts, job_id
                );
            }
            Ok(CompletionStatus::Finished(code)) if policy.accepts(code) => {
                info!("{} completed with return code {}", job_id, code);
                return Ok(());
            }
            Ok(CompletionStatus::Finished(code)) => {
                return Err(PollError::ReturnCodeExceeded {
                    job_id: job_id.clone(),
                    observed: code,
                    allowed: policy.max_return_code,
                });
            }
            Err(_) => {
                return Err(PollError::UnrecognizedStatus {
                    job_id: job_id.clone(),
                    raw,
                });
            }
        }
    }

    Err(PollError::Timeout {
        job_id: job_id.clone(),
        attempts: policy.max_attempts,
    })
}
