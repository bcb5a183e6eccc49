//! Pipeline step descriptors and execution
//!
//! Steps come in two shapes: batch jobs that are submitted and then polled
//! to completion, and direct invocations whose own exit is the success
//! signal. Both shapes produce the same result record, so the sequencer
//! treats them uniformly.

use girder_core::domain::job::{DataSet, PollPolicy};
use girder_zowe::ClientError;
use thiserror::Error;

use crate::config::Config;
use crate::gateway::JobGateway;
use crate::poller::{PollError, await_completion};

/// The copy must land cleanly; any nonzero code means the load module is suspect
const COPY_MAX_RC: i32 = 0;
/// Bind and grant tolerate warning-level codes
const BIND_MAX_RC: i32 = 4;
/// Compile and link tolerate warning-level codes
const BUILD_MAX_RC: i32 = 4;

/// What a step does when executed
#[derive(Debug, Clone)]
pub enum StepAction {
    /// Submit the JCL in a data set member, then poll the job to completion
    SubmitAndAwait { job: DataSet, policy: PollPolicy },
    /// Invoke a CICS new-copy directly; there is no job id to poll
    Refresh {
        program: String,
        extra_args: Vec<String>,
    },
}

/// One named unit of the pipeline
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub name: String,
    pub action: StepAction,
}

impl StepSpec {
    /// Declares a submit-and-poll step
    pub fn submit_and_await(name: impl Into<String>, job: DataSet, policy: PollPolicy) -> Self {
        Self {
            name: name.into(),
            action: StepAction::SubmitAndAwait { job, policy },
        }
    }

    /// Declares a direct-invocation refresh step
    pub fn refresh(
        name: impl Into<String>,
        program: impl Into<String>,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            action: StepAction::Refresh {
                program: program.into(),
                extra_args,
            },
        }
    }
}

/// Why a step failed
///
/// Wraps the originating layer's error without rewording it; the sequencer
/// attaches the step name, nothing more.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Invoke(#[from] ClientError),

    #[error(transparent)]
    Poll(#[from] PollError),
}

/// Executes a single step against the external system
pub async fn execute_step(gateway: &dyn JobGateway, step: &StepSpec) -> Result<(), StepError> {
    match &step.action {
        StepAction::SubmitAndAwait { job, policy } => {
            let job_id = gateway.submit_job(job).await?;
            await_completion(gateway, &job_id, policy).await?;
            Ok(())
        }
        StepAction::Refresh {
            program,
            extra_args,
        } => {
            gateway.refresh_program(program, extra_args).await?;
            Ok(())
        }
    }
}

/// Copies the program to the test environment
pub fn copy_step(config: &Config) -> StepSpec {
    StepSpec::submit_and_await(
        "copy",
        DataSet::new(&config.jcl_library, &config.copy_member),
        config.poll_policy(COPY_MAX_RC),
    )
}

/// Binds the DB2 package and grants execute authority
pub fn bind_step(config: &Config) -> StepSpec {
    StepSpec::submit_and_await(
        "bind-n-grant",
        DataSet::new(&config.jcl_library, &config.bind_member),
        config.poll_policy(BIND_MAX_RC),
    )
}

/// Compiles and link-edits the program
pub fn build_step(config: &Config) -> StepSpec {
    StepSpec::submit_and_await(
        "build",
        DataSet::new(&config.jcl_library, &config.build_member),
        config.poll_policy(BUILD_MAX_RC),
    )
}

/// New-copies the program in CICS
pub fn refresh_step(config: &Config) -> StepSpec {
    StepSpec::refresh(
        "cics-refresh",
        &config.cics_program,
        config.cics_extra_args.clone(),
    )
}

/// The standard deploy sequence: copy, bind-n-grant, cics-refresh
pub fn deploy_steps(config: &Config) -> Vec<StepSpec> {
    vec![copy_step(config), bind_step(config), refresh_step(config)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("IBMUSER.MARBLES.JCL", "MARBLES")
    }

    fn max_rc(step: &StepSpec) -> i32 {
        match &step.action {
            StepAction::SubmitAndAwait { policy, .. } => policy.max_return_code,
            StepAction::Refresh { .. } => panic!("refresh steps carry no poll policy"),
        }
    }

    #[test]
    fn test_per_step_return_code_ceilings() {
        let config = config();
        assert_eq!(max_rc(&copy_step(&config)), 0);
        assert_eq!(max_rc(&bind_step(&config)), 4);
        assert_eq!(max_rc(&build_step(&config)), 4);
    }

    #[test]
    fn test_steps_target_configured_members() {
        let config = config();
        match &copy_step(&config).action {
            StepAction::SubmitAndAwait { job, .. } => {
                assert_eq!(job.to_string(), "IBMUSER.MARBLES.JCL(MARSCOPY)");
            }
            _ => panic!("copy must be a submit step"),
        }
        match &build_step(&config).action {
            StepAction::SubmitAndAwait { job, .. } => {
                assert_eq!(job.to_string(), "IBMUSER.MARBLES.JCL(MARSGEN)");
            }
            _ => panic!("build must be a submit step"),
        }
    }

    #[test]
    fn test_deploy_sequence_order() {
        let names: Vec<_> = deploy_steps(&config())
            .iter()
            .map(|step| step.name.clone())
            .collect();
        // build is independently invocable but not part of deploy
        assert_eq!(names, vec!["copy", "bind-n-grant", "cics-refresh"]);
    }

    #[test]
    fn test_refresh_step_carries_extra_args() {
        let mut config = config();
        config.cics_extra_args = vec!["--region-name".to_string(), "CICSA".to_string()];

        match &refresh_step(&config).action {
            StepAction::Refresh {
                program,
                extra_args,
            } => {
                assert_eq!(program, "MARBLES");
                assert_eq!(extra_args, &["--region-name", "CICSA"]);
            }
            _ => panic!("cics-refresh must be a direct invocation"),
        }
    }
}
