//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Identifier of one submitted batch job
///
/// Minted by the external system; Girder never inspects its structure. A
/// malformed id only surfaces downstream, when status queries against it fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Creates a job id from raw submission output, trimming incidental whitespace
    pub fn from_submit_output(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The id as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A partitioned data set member holding submittable JCL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    /// Library (PDS) name, e.g. "IBMUSER.MARBLES.JCL"
    pub library: String,
    /// Member within the library, e.g. "MARSCOPY"
    pub member: String,
}

impl DataSet {
    /// Creates a data set reference from a library and member name
    pub fn new(library: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            member: member.into(),
        }
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.library, self.member)
    }
}

/// Interpretation of one raw status query result
///
/// The external system reports a job's retcode field as the literal "null"
/// while the job is still running, or as a two-token label/code pair such as
/// "CC 0004" once it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    /// The job has not reached a terminal state yet
    Pending,
    /// The job finished with the given return code
    Finished(i32),
}

/// Status text that matches neither recognized shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized job status '{raw}'")]
pub struct UnrecognizedStatus {
    /// The raw status text as returned by the query
    pub raw: String,
}

impl CompletionStatus {
    /// Interprets the raw retcode field from a status query.
    ///
    /// Interpretation is a pure function of the input text: the same string
    /// always classifies the same way. The code token is parsed as a base-10
    /// integer and may be negative.
    pub fn parse(raw: &str) -> Result<Self, UnrecognizedStatus> {
        let raw = raw.trim();

        if raw == "null" {
            return Ok(Self::Pending);
        }

        let mut tokens = raw.split_whitespace();
        if let (Some(_label), Some(code), None) = (tokens.next(), tokens.next(), tokens.next())
            && let Ok(code) = code.parse::<i32>()
        {
            return Ok(Self::Finished(code));
        }

        Err(UnrecognizedStatus {
            raw: raw.to_string(),
        })
    }
}

/// Polling budget and pass criteria for one job's completion watch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollPolicy {
    /// Maximum number of status queries before giving up
    pub max_attempts: u32,
    /// Delay before each status query
    pub interval: Duration,
    /// Highest return code still considered a pass (inclusive)
    pub max_return_code: i32,
}

impl PollPolicy {
    /// Creates a policy with the default budget and the given return code ceiling
    pub fn with_max_return_code(max_return_code: i32) -> Self {
        Self {
            max_return_code,
            ..Self::default()
        }
    }

    /// True when an observed return code is within the tolerated range.
    ///
    /// The comparison is inclusive: 0 is a clean finish and small positive
    /// codes are warnings, so a job passes at or below the ceiling.
    pub fn accepts(&self, code: i32) -> bool {
        code <= self.max_return_code
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_millis(1000),
            max_return_code: 0,
        }
    }
}
