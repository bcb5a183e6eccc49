//! Gateway traits over the external job system
//!
//! The pipeline never talks to the Zowe client type directly; it goes
//! through these traits so tests can script the external system's behavior.
//! `StatusSource` is the narrow view the poller needs, `JobGateway` the full
//! set of operations a step can perform.

use async_trait::async_trait;
use girder_core::domain::job::{DataSet, JobId};
use girder_zowe::{ClientError, ZoweClient};

/// Source of raw job status strings
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the raw retcode field for a job
    async fn fetch_retcode(&self, job_id: &JobId) -> Result<String, ClientError>;
}

/// Operations the pipeline needs from the external job system
#[async_trait]
pub trait JobGateway: StatusSource {
    /// Submits the JCL in a data set member, returning the new job's id
    async fn submit_job(&self, job: &DataSet) -> Result<JobId, ClientError>;

    /// Issues a new-copy for a CICS program
    async fn refresh_program(
        &self,
        program: &str,
        extra_args: &[String],
    ) -> Result<(), ClientError>;
}

#[async_trait]
impl StatusSource for ZoweClient {
    async fn fetch_retcode(&self, job_id: &JobId) -> Result<String, ClientError> {
        self.query_retcode(job_id).await
    }
}

#[async_trait]
impl JobGateway for ZoweClient {
    async fn submit_job(&self, job: &DataSet) -> Result<JobId, ClientError> {
        ZoweClient::submit_job(self, job).await
    }

    async fn refresh_program(
        &self,
        program: &str,
        extra_args: &[String],
    ) -> Result<(), ClientError> {
        ZoweClient::refresh_program(self, program, extra_args).await
    }
}
