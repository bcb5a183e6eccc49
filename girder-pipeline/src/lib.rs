//! Girder Pipeline
//!
//! Execution engine for the deploy pipeline.
//!
//! This crate contains:
//! - Poller: bounded completion watch over submitted batch jobs
//! - Steps: declarative step descriptors and their execution
//! - Sequencer: ordered, short-circuiting pipeline runs
//! - Config: runtime configuration for the standard pipeline

pub mod config;
pub mod gateway;
pub mod pipeline;
pub mod poller;
pub mod steps;

// Re-export commonly used types
pub use config::Config;
pub use gateway::{JobGateway, StatusSource};
pub use pipeline::run_pipeline;
pub use poller::{PollError, await_completion};
pub use steps::{StepAction, StepError, StepSpec};
