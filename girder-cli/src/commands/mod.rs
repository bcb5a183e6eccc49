//! Commands module
//!
//! Defines all CLI commands and their handlers. Every command runs through
//! the same pipeline machinery: single-step commands are one-step pipelines,
//! so reporting and exit behavior stay uniform.

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use girder_core::domain::step::{PipelineResult, StepResult};
use girder_pipeline::{Config, run_pipeline, steps};
use girder_zowe::ZoweClient;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Copy the program to the test environment
    Copy,
    /// Run the bind & grant job
    BindNGrant,
    /// Build the COBOL program
    Build,
    /// Refresh (new-copy) the CICS program
    CicsRefresh,
    /// Run the full deploy sequence: copy, bind-n-grant, cics-refresh
    Deploy,
}

/// Handle a CLI command
///
/// Builds the step list for the requested command, runs it, prints the
/// report, and exits non-zero when any step failed.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The pipeline configuration
/// * `json` - Print the report as JSON instead of the human summary
pub async fn handle_command(command: Commands, config: &Config, json: bool) -> Result<()> {
    config.validate()?;

    let client = ZoweClient::with_bin(&config.zowe_bin);

    let step_list = match command {
        Commands::Copy => vec![steps::copy_step(config)],
        Commands::BindNGrant => vec![steps::bind_step(config)],
        Commands::Build => vec![steps::build_step(config)],
        Commands::CicsRefresh => vec![steps::refresh_step(config)],
        Commands::Deploy => steps::deploy_steps(config),
    };

    let result = run_pipeline(&client, &step_list).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    if let Some(failed) = result.failed_step() {
        bail!("step '{}' failed", failed.name);
    }

    Ok(())
}

/// Print the run report
fn print_report(result: &PipelineResult) {
    println!();
    for step in &result.steps {
        print_step_result(step);
    }
    println!();

    if result.success() {
        println!("{}", "Pipeline completed successfully.".green().bold());
    } else {
        println!("{}", "Pipeline failed.".red().bold());
    }
}

/// Print a single step's line, with diagnostics when it failed
fn print_step_result(step: &StepResult) {
    let mark = if step.is_success() {
        "✓".green()
    } else {
        "✗".red()
    };

    println!(
        "  {} {} {}",
        mark,
        step.name.bold(),
        format!("({} ms)", step.duration_ms()).dimmed()
    );

    if let Some(reason) = step.failure_reason() {
        for line in reason.lines() {
            println!("      {}", line.red());
        }
    }
}
