//! Step result types
//!
//! One `StepResult` is produced per executed pipeline step and aggregated
//! into a `PipelineResult`. Nothing here is persisted; the records live for
//! one process invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one pipeline step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Success,
    Failure {
        /// Full diagnostic text from the failing layer, unwrapped
        reason: String,
    },
}

/// Record of one executed step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub name: String,
    pub outcome: StepOutcome,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl StepResult {
    /// True when the step ran to completion without failure
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, StepOutcome::Success)
    }

    /// Wall-clock duration of the step in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.completed_at - self.started_at).num_milliseconds()
    }

    /// The failure reason, if the step failed
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            StepOutcome::Failure { reason } => Some(reason),
            StepOutcome::Success => None,
        }
    }
}

/// Aggregate result of a pipeline run
///
/// Steps appear strictly in execution order. Because execution halts at the
/// first failure, a failed step is always the last entry and steps declared
/// after it are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub steps: Vec<StepResult>,
}

impl PipelineResult {
    /// True when every executed step succeeded
    pub fn success(&self) -> bool {
        self.steps.iter().all(StepResult::is_success)
    }

    /// The step the pipeline failed at, if any
    pub fn failed_step(&self) -> Option<&StepResult> {
        self.steps.iter().find(|step| !step.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, outcome: StepOutcome) -> StepResult {
        let now = Utc::now();
        StepResult {
            name: name.to_string(),
            outcome,
            started_at: now,
            completed_at: now,
        }
    }

    #[test]
    fn test_pipeline_result_success() {
        let result = PipelineResult {
            steps: vec![
                step("copy", StepOutcome::Success),
                step("bind-n-grant", StepOutcome::Success),
            ],
        };
        assert!(result.success());
        assert!(result.failed_step().is_none());
    }

    #[test]
    fn test_pipeline_result_names_failed_step() {
        let result = PipelineResult {
            steps: vec![
                step("copy", StepOutcome::Success),
                step(
                    "bind-n-grant",
                    StepOutcome::Failure {
                        reason: "return code 12".to_string(),
                    },
                ),
            ],
        };
        assert!(!result.success());
        assert_eq!(result.failed_step().unwrap().name, "bind-n-grant");
    }

    #[test]
    fn test_empty_pipeline_is_success() {
        let result = PipelineResult { steps: vec![] };
        assert!(result.success());
    }
}
