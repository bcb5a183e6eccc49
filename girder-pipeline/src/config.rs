//! Pipeline configuration
//!
//! Defines all configurable parameters for the deploy pipeline including
//! data set names, the CICS target, and polling behavior.

use std::time::Duration;

use girder_core::domain::job::PollPolicy;

/// Pipeline configuration
///
/// The member names default to the workshop JCL library layout; everything
/// is overridable so the same binary drives other applications.
#[derive(Debug, Clone)]
pub struct Config {
    /// Partitioned data set holding the deploy JCL (e.g. "IBMUSER.MARBLES.JCL")
    pub jcl_library: String,

    /// Member submitted by the copy step
    pub copy_member: String,

    /// Member submitted by the bind-n-grant step
    pub bind_member: String,

    /// Member submitted by the build step
    pub build_member: String,

    /// CICS program to new-copy
    pub cics_program: String,

    /// Extra arguments appended to the refresh command (region options etc.)
    ///
    /// Explicit configuration; the refresh step reads nothing from the
    /// ambient environment.
    pub cics_extra_args: Vec<String>,

    /// Maximum status checks per job before timing out
    pub poll_attempts: u32,

    /// Delay before each status check
    pub poll_interval: Duration,

    /// Zowe CLI binary name or path
    pub zowe_bin: String,
}

impl Config {
    /// Creates a configuration with defaults for everything but the two
    /// deployment-specific names
    pub fn new(jcl_library: impl Into<String>, cics_program: impl Into<String>) -> Self {
        Self {
            jcl_library: jcl_library.into(),
            copy_member: "MARSCOPY".to_string(),
            bind_member: "MARBIND".to_string(),
            build_member: "MARSGEN".to_string(),
            cics_program: cics_program.into(),
            cics_extra_args: Vec::new(),
            poll_attempts: 30,
            poll_interval: Duration::from_millis(1000),
            zowe_bin: "zowe".to_string(),
        }
    }

    /// Builds the poll policy for a step with the given return code ceiling
    pub fn poll_policy(&self, max_return_code: i32) -> PollPolicy {
        PollPolicy {
            max_attempts: self.poll_attempts,
            interval: self.poll_interval,
            max_return_code,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jcl_library.is_empty() {
            anyhow::bail!("jcl_library cannot be empty");
        }

        if self.jcl_library.contains('(') {
            anyhow::bail!("jcl_library must name the PDS only; members are per step");
        }

        for (field, member) in [
            ("copy_member", &self.copy_member),
            ("bind_member", &self.bind_member),
            ("build_member", &self.build_member),
        ] {
            if member.is_empty() {
                anyhow::bail!("{} cannot be empty", field);
            }
        }

        if self.cics_program.is_empty() {
            anyhow::bail!("cics_program cannot be empty");
        }

        if self.poll_attempts == 0 {
            anyhow::bail!("poll_attempts must be greater than 0");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.zowe_bin.is_empty() {
            anyhow::bail!("zowe_bin cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_members_and_polling() {
        let config = Config::new("IBMUSER.MARBLES.JCL", "MARBLES");
        assert_eq!(config.copy_member, "MARSCOPY");
        assert_eq!(config.bind_member, "MARBIND");
        assert_eq!(config.build_member, "MARSGEN");
        assert_eq!(config.poll_attempts, 30);
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
        assert_eq!(config.zowe_bin, "zowe");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("IBMUSER.MARBLES.JCL", "MARBLES");
        assert!(config.validate().is_ok());

        // Empty library should fail
        config.jcl_library = String::new();
        assert!(config.validate().is_err());

        // Library with member syntax should fail
        config.jcl_library = "IBMUSER.MARBLES.JCL(MARSCOPY)".to_string();
        assert!(config.validate().is_err());

        config.jcl_library = "IBMUSER.MARBLES.JCL".to_string();
        assert!(config.validate().is_ok());

        // Zero attempts should fail
        config.poll_attempts = 0;
        assert!(config.validate().is_err());
        config.poll_attempts = 30;

        // Zero interval should fail
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_millis(500);

        // Empty CICS program should fail
        config.cics_program = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_poll_policy_carries_step_ceiling() {
        let mut config = Config::new("IBMUSER.MARBLES.JCL", "MARBLES");
        config.poll_attempts = 10;
        config.poll_interval = Duration::from_millis(250);

        let policy = config.poll_policy(4);
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.interval, Duration::from_millis(250));
        assert_eq!(policy.max_return_code, 4);
    }
}
