//! Core domain types
//!
//! This module contains the domain structures shared across Girder crates.
//! Job types describe one unit of external work; step types describe how the
//! pipeline records what happened to it.

pub mod job;
pub mod step;
