//! CICS-related Zowe operations

use crate::ZoweClient;
use crate::error::Result;
use tracing::info;

impl ZoweClient {
    /// Issues a new-copy for a CICS program.
    ///
    /// Runs `zowe cics refresh program "<name>"` plus any extra arguments
    /// (region or profile options) supplied by configuration. There is no
    /// job to poll afterwards: a clean exit with a quiet error channel is
    /// the sole success signal.
    pub async fn refresh_program(&self, program: &str, extra_args: &[String]) -> Result<()> {
        let mut args: Vec<String> = vec![
            "cics".into(),
            "refresh".into(),
            "program".into(),
            program.into(),
        ];
        args.extend(extra_args.iter().cloned());

        self.run_checked(args).await?;

        info!("refreshed CICS program {}", program);
        Ok(())
    }
}
