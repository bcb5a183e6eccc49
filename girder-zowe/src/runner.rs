//! Subprocess execution
//!
//! The `CommandRunner` trait is the seam between the client and the
//! operating system. Production code uses [`ShellRunner`]; tests substitute
//! scripted implementations.

use async_trait::async_trait;
use tokio::process::Command;

/// Captured output of one external command invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; -1 when the process was killed by a signal
    pub exit_code: i32,
}

impl CommandOutput {
    /// True when the process exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstraction over spawning external processes
///
/// Trait-based to enable testing and dependency injection.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a program to completion, capturing its output.
    ///
    /// An `Err` here means the process could not be run at all; a process
    /// that ran and exited non-zero is an `Ok` with a non-zero exit code.
    async fn run(&self, program: &str, args: Vec<String>) -> std::io::Result<CommandOutput>;
}

/// Production runner backed by tokio's process support
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, program: &str, args: Vec<String>) -> std::io::Result<CommandOutput> {
        let output = Command::new(program).args(&args).output().await?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
