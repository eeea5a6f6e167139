//! Configuration management for the buildchat notifier.
//!
//! The notifier is configured once at startup from a TOML file. Malformed
//! values never block startup: they are reported as [`ConfigWarning`]s and
//! logged by the caller.
//!
//! # Usage
//!
//! ```rust
//! use buildchat_config::NotifierConfig;
//!
//! let (config, warnings) = NotifierConfig::from_toml(r##"
//!     endpoint = "https://hooks.slack.com/services/T000/B000/XXXX"
//!     channel = "#builds"
//! "##).unwrap();
//!
//! assert!(warnings.is_empty());
//! assert_eq!(config.channel.as_deref(), Some("#builds"));
//! ```

pub mod error;
pub mod notifier_config;
pub mod prelude;
pub mod warning;

pub use notifier_config::{MessageFormat, NotifierConfig, check_table};
pub use warning::{ConfigWarning, log_warnings};
