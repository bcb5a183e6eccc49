//! Girder Core
//!
//! Core types for the Girder deploy pipeline.
//!
//! This crate contains:
//! - Job types: opaque job ids, completion status interpretation, poll policies
//! - Step types: per-step results and their aggregation into a pipeline result

pub mod domain;
