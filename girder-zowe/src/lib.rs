//! Girder Zowe Client
//!
//! A typed client for the Zowe CLI, the external interface to the mainframe.
//! Girder treats the CLI as a black box: commands go in, a job id or a raw
//! status string comes back on stdout, and anything on stderr is diagnostic
//! output for the operator.
//!
//! # Example
//!
//! ```no_run
//! use girder_core::domain::job::DataSet;
//! use girder_zowe::ZoweClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ZoweClient::new();
//!
//!     let job = DataSet::new("IBMUSER.MARBLES.JCL", "MARSCOPY");
//!     let job_id = client.submit_job(&job).await?;
//!
//!     println!("submitted {} as {}", job, job_id);
//!     Ok(())
//! }
//! ```

mod cics;
pub mod error;
mod jobs;
pub mod runner;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use runner::{CommandOutput, CommandRunner, ShellRunner};

use std::sync::Arc;
use tracing::debug;

/// Client for the Zowe CLI
///
/// Every operation builds one command line, runs it through the configured
/// [`CommandRunner`], and interprets the captured output the same way:
/// - spawn failure or non-zero exit → [`ClientError::ExecutionFailed`]
/// - clean exit with stderr text → [`ClientError::DiagnosticOutput`]
/// - clean exit, quiet stderr → stdout is the payload
#[derive(Clone)]
pub struct ZoweClient {
    /// Binary name or path of the Zowe CLI (e.g. "zowe")
    zowe_bin: String,
    /// Subprocess seam
    runner: Arc<dyn CommandRunner>,
}

impl ZoweClient {
    /// Create a client that invokes `zowe` from the PATH
    pub fn new() -> Self {
        Self::with_bin("zowe")
    }

    /// Create a client with a custom binary name or path
    pub fn with_bin(zowe_bin: impl Into<String>) -> Self {
        Self {
            zowe_bin: zowe_bin.into(),
            runner: Arc::new(ShellRunner),
        }
    }

    /// Create a client with a custom command runner
    ///
    /// This is the injection point for tests and for environments where
    /// subprocesses are launched through something other than the local shell.
    pub fn with_runner(zowe_bin: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            zowe_bin: zowe_bin.into(),
            runner,
        }
    }

    /// Get the configured Zowe binary name
    pub fn zowe_bin(&self) -> &str {
        &self.zowe_bin
    }

    /// Runs one Zowe command and applies the shared output interpretation.
    ///
    /// Returns raw stdout on success. The rendered command line is carried in
    /// every error so the operator can re-run the exact invocation.
    pub(crate) async fn run_checked(&self, args: Vec<String>) -> Result<String> {
        let command = format!("{} {}", self.zowe_bin, args.join(" "));
        debug!("running: {}", command);

        let output = self
            .runner
            .run(&self.zowe_bin, args)
            .await
            .map_err(|e| ClientError::execution_failed(&command, e.to_string()))?;

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            debug!("stderr: {}", stderr);
        }

        if !output.success() {
            return Err(ClientError::execution_failed(
                &command,
                format!("exit status {}\n{}", output.exit_code, stderr),
            ));
        }

        if !stderr.is_empty() {
            return Err(ClientError::diagnostic_output(&command, stderr));
        }

        Ok(output.stdout)
    }
}

impl Default for ZoweClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::runner::{CommandOutput, CommandRunner};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Runner that replays scripted outputs and records every invocation
    pub struct ScriptedRunner {
        outputs: Mutex<VecDeque<std::io::Result<CommandOutput>>>,
        pub calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl ScriptedRunner {
        pub fn new(outputs: Vec<std::io::Result<CommandOutput>>) -> Self {
            Self {
                outputs: Mutex::new(outputs.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Single clean invocation producing the given stdout
        pub fn stdout(stdout: &str) -> Self {
            Self::new(vec![Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                exit_code: 0,
            })])
        }

        pub fn recorded_calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: Vec<String>) -> std::io::Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.clone()));
            self.outputs
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted output left for: {} {:?}", program, args))
        }
    }
}
