//! Common types and utilities.

/// Transport error type.
pub use crate::error::Error;

/// Transport result type.
pub type Result<T> = core::result::Result<T, Error>;
