use std::fmt;

use serde::{Deserialize, Serialize};

/// Host result code of a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum BuildResult {
    Success,
    Warnings,
    Failure,
    Skipped,
    Exception,
    Retry,
    Cancelled,
    /// A code this crate does not know about.
    Unknown(i64),
}

impl From<i64> for BuildResult {
    fn from(code: i64) -> Self {
        match code {
            0 => BuildResult::Success,
            1 => BuildResult::Warnings,
            2 => BuildResult::Failure,
            3 => BuildResult::Skipped,
            4 => BuildResult::Exception,
            5 => BuildResult::Retry,
            6 => BuildResult::Cancelled,
            other => BuildResult::Unknown(other),
        }
    }
}

impl From<BuildResult> for i64 {
    fn from(result: BuildResult) -> Self {
        match result {
            BuildResult::Success => 0,
            BuildResult::Warnings => 1,
            BuildResult::Failure => 2,
            BuildResult::Skipped => 3,
            BuildResult::Exception => 4,
            BuildResult::Retry => 5,
            BuildResult::Cancelled => 6,
            BuildResult::Unknown(code) => code,
        }
    }
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildResult::Success => "success",
            BuildResult::Warnings => "warnings",
            BuildResult::Failure => "failure",
            BuildResult::Skipped => "skipped",
            BuildResult::Exception => "exception",
            BuildResult::Retry => "retry",
            BuildResult::Cancelled => "cancelled",
            BuildResult::Unknown(code) => return write!(f, "unknown ({code})"),
        };
        f.write_str(name)
    }
}

/// The `results` field of a build: a host result code or a summary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildResults {
    Code(BuildResult),
    Summary(String),
}

impl BuildResults {
    /// Whether the value is worth a line of its own: a non-zero code or a
    /// non-empty summary.
    pub fn is_notable(&self) -> bool {
        match self {
            BuildResults::Code(code) => *code != BuildResult::Success,
            BuildResults::Summary(summary) => !summary.is_empty(),
        }
    }
}

impl From<BuildResult> for BuildResults {
    fn from(code: BuildResult) -> Self {
        BuildResults::Code(code)
    }
}

impl From<&str> for BuildResults {
    fn from(summary: &str) -> Self {
        BuildResults::Summary(summary.to_string())
    }
}

impl fmt::Display for BuildResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildResults::Code(code) => write!(f, "{code}"),
            BuildResults::Summary(summary) => f.write_str(summary),
        }
    }
}
