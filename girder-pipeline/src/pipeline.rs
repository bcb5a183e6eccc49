//! Pipeline sequencer
//!
//! Runs a declared list of steps strictly in order, short-circuiting at the
//! first failure. Steps that already ran stay run; there is no rollback.

use chrono::Utc;
use girder_core::domain::step::{PipelineResult, StepOutcome, StepResult};
use tracing::{error, info};

use crate::gateway::JobGateway;
use crate::steps::{StepSpec, execute_step};

/// Executes the given steps in declared order.
///
/// Each step produces exactly one [`StepResult`]. The first failure ends the
/// run; steps after it are never attempted and do not appear in the result.
/// The failing step's record carries the originating error text unchanged.
pub async fn run_pipeline(gateway: &dyn JobGateway, steps: &[StepSpec]) -> PipelineResult {
    let mut results = Vec::with_capacity(steps.len());

    for step in steps {
        info!("step '{}' starting", step.name);
        let started_at = Utc::now();

        let outcome = match execute_step(gateway, step).await {
            Ok(()) => StepOutcome::Success,
            Err(e) => StepOutcome::Failure {
                reason: e.to_string(),
            },
        };

        let result = StepResult {
            name: step.name.clone(),
            outcome,
            started_at,
            completed_at: Utc::now(),
        };

        match &result.outcome {
            StepOutcome::Success => info!("step '{}' completed", step.name),
            StepOutcome::Failure { reason } => error!("step '{}' failed: {}", step.name, reason),
        }

        let failed = !result.is_success();
        results.push(result);
        if failed {
            break;
        }
    }

    PipelineResult { steps: results }
}
