//! Girder CLI
//!
//! Command-line driver for the mainframe build & deploy pipeline.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use girder_pipeline::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "girder")]
#[command(about = "Mainframe build & deploy pipeline driver", long_about = None)]
struct Cli {
    /// Partitioned data set holding the deploy JCL
    #[arg(long, env = "GIRDER_JCL_LIBRARY")]
    jcl_library: String,

    /// CICS program to new-copy on refresh
    #[arg(long, env = "GIRDER_CICS_PROGRAM")]
    cics_program: String,

    /// Extra arguments for the CICS refresh command, whitespace-separated
    #[arg(long, env = "GIRDER_CICS_OPTIONS")]
    cics_options: Option<String>,

    /// JCL member submitted by the copy step
    #[arg(long, env = "GIRDER_COPY_MEMBER", default_value = "MARSCOPY")]
    copy_member: String,

    /// JCL member submitted by the bind-n-grant step
    #[arg(long, env = "GIRDER_BIND_MEMBER", default_value = "MARBIND")]
    bind_member: String,

    /// JCL member submitted by the build step
    #[arg(long, env = "GIRDER_BUILD_MEMBER", default_value = "MARSGEN")]
    build_member: String,

    /// Maximum status checks per job before timing out
    #[arg(long, env = "GIRDER_POLL_ATTEMPTS", default_value_t = 30)]
    tries: u32,

    /// Wait in milliseconds between status checks
    #[arg(long, env = "GIRDER_POLL_INTERVAL_MS", default_value_t = 1000)]
    wait_ms: u64,

    /// Zowe CLI binary to invoke
    #[arg(long, env = "GIRDER_ZOWE_BIN", default_value = "zowe")]
    zowe_bin: String,

    /// Print the run report as JSON instead of the human summary
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn to_config(&self) -> Config {
        let mut config = Config::new(&self.jcl_library, &self.cics_program);
        config.copy_member = self.copy_member.clone();
        config.bind_member = self.bind_member.clone();
        config.build_member = self.build_member.clone();
        config.cics_extra_args = self
            .cics_options
            .as_deref()
            .map(|opts| opts.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        config.poll_attempts = self.tries;
        config.poll_interval = Duration::from_millis(self.wait_ms);
        config.zowe_bin = self.zowe_bin.clone();
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "girder_pipeline=info,girder_zowe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    handle_command(cli.command, &config, cli.json).await
}
