//! Job-related Zowe operations

use crate::ZoweClient;
use crate::error::Result;
use girder_core::domain::job::{DataSet, JobId};
use tracing::info;

impl ZoweClient {
    /// Submits the JCL in a data set member and returns the new job's id.
    ///
    /// Runs `zowe jobs submit data-set "<library>(<member>)" --rff jobid
    /// --rft string`. The trimmed stdout is taken as the job id verbatim; no
    /// shape validation is applied, so a malformed id only shows up when
    /// status queries against it start failing.
    pub async fn submit_job(&self, job: &DataSet) -> Result<JobId> {
        let args: Vec<String> = vec![
            "jobs".into(),
            "submit".into(),
            "data-set".into(),
            job.to_string(),
            "--rff".into(),
            "jobid".into(),
            "--rft".into(),
            "string".into(),
        ];

        let stdout = self.run_checked(args).await?;
        let job_id = JobId::from_submit_output(&stdout);

        info!("submitted {} as {}", job, job_id);
        Ok(job_id)
    }

    /// Queries the retcode field of a job's status.
    ///
    /// Runs `zowe jobs view job-status-by-jobid <id> --rff retcode --rft
    /// string` and returns the trimmed field text: "null" while the job is
    /// still running, or a label/code pair such as "CC 0000" once finished.
    /// Interpretation of the text is left to the caller.
    pub async fn query_retcode(&self, job_id: &JobId) -> Result<String> {
        let args: Vec<String> = vec![
            "jobs".into(),
            "view".into(),
            "job-status-by-jobid".into(),
            job_id.as_str().into(),
            "--rff".into(),
            "retcode".into(),
            "--rft".into(),
            "string".into(),
        ];

        let stdout = self.run_checked(args).await?;
        Ok(stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::ZoweClient;
    use crate::test_support::ScriptedRunner;
    use girder_core::domain::job::{DataSet, JobId};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_job_builds_command_and_trims_id() {
        let runner = Arc::new(ScriptedRunner::stdout("JOB04567\n"));
        let client = ZoweClient::with_runner("zowe", runner.clone());

        let job = DataSet::new("IBMUSER.MARBLES.JCL", "MARSCOPY");
        let job_id = client.submit_job(&job).await.unwrap();
        assert_eq!(job_id.as_str(), "JOB04567");

        let calls = runner.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "zowe");
        assert_eq!(
            calls[0].1,
            vec![
                "jobs",
                "submit",
                "data-set",
                "IBMUSER.MARBLES.JCL(MARSCOPY)",
                "--rff",
                "jobid",
                "--rft",
                "string",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_retcode_builds_command_and_trims() {
        let runner = Arc::new(ScriptedRunner::stdout("CC 0000\n"));
        let client = ZoweClient::with_runner("zowe", runner.clone());

        let job_id = JobId::from_submit_output("JOB04567");
        let retcode = client.query_retcode(&job_id).await.unwrap();
        assert_eq!(retcode, "CC 0000");

        let calls = runner.recorded_calls();
        assert_eq!(
            calls[0].1,
            vec![
                "jobs",
                "view",
                "job-status-by-jobid",
                "JOB04567",
                "--rff",
                "retcode",
                "--rft",
                "string",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_retcode_preserves_null() {
        let runner = Arc::new(ScriptedRunner::stdout("null\n"));
        let client = ZoweClient::with_runner("zowe", runner);

        let job_id = JobId::from_submit_output("JOB04567");
        assert_eq!(client.query_retcode(&job_id).await.unwrap(), "null");
    }
}
