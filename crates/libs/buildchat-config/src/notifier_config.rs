//! Notifier configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;
use toml::{Table, Value};

use crate::{
    prelude::*,
    warning::{ConfigWarning, log_warnings},
};

/// Shape of the text posted for each build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Labeled lines: scheduler, builder, worker, reason, state, branch and links.
    #[default]
    Detailed,
    /// Single `state - branch - reason` headline followed by links.
    Compact,
}

/// Configuration supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotifierConfig {
    /// Webhook URL every message is posted to.
    pub endpoint: String,
    /// Chat channel override.
    pub channel: Option<String>,
    /// Display name override.
    pub username: Option<String>,
    /// Deprecated webhook host. Only produces a warning.
    pub host_url: Option<String>,
    /// Rich attachments toggle. Not used by the `{"text": ...}` payload.
    #[serde(default = "default_attachments")]
    pub attachments: bool,
    /// Log every raw build record before it is formatted.
    #[serde(default)]
    pub verbose: bool,
    /// Message layout.
    #[serde(default)]
    pub format: MessageFormat,
    /// HTTP timeout for a single delivery.
    pub timeout_secs: Option<u64>,
}

fn default_attachments() -> bool {
    true
}

/// Fields whose TOML type is checked before deserialization.
const TYPED_FIELDS: [(&str, &str); 8] = [
    ("endpoint", "string"),
    ("channel", "string"),
    ("username", "string"),
    ("host_url", "string"),
    ("attachments", "boolean"),
    ("verbose", "boolean"),
    ("format", "string"),
    ("timeout_secs", "integer"),
];

const FORMATS: [&str; 2] = ["detailed", "compact"];

/// Checks the type of every known field of a raw configuration table, then
/// the range of the fields whose type is right but whose value may not be.
pub fn check_table(table: &Table) -> Vec<ConfigWarning> {
    let mut warnings = check_types(table);

    if let Some(Value::String(format)) = table.get("format") {
        if !FORMATS.contains(&format.as_str()) {
            warnings.push(ConfigWarning::InvalidValue {
                field: "format",
                value: format.clone(),
            });
        }
    }
    if let Some(Value::Integer(secs)) = table.get("timeout_secs") {
        if *secs < 0 {
            warnings.push(ConfigWarning::InvalidValue {
                field: "timeout_secs",
                value: secs.to_string(),
            });
        }
    }
    warnings
}

fn check_types(table: &Table) -> Vec<ConfigWarning> {
    TYPED_FIELDS
        .iter()
        .filter_map(|&(field, expected)| {
            let value = table.get(field)?;
            if value.type_str() == expected {
                return None;
            }
            Some(ConfigWarning::WrongType {
                field,
                expected,
                found: value.type_str(),
            })
        })
        .collect()
}

impl NotifierConfig {
    /// Creates a configuration with defaults for everything but the endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            channel: None,
            username: None,
            host_url: None,
            attachments: default_attachments(),
            verbose: false,
            format: MessageFormat::default(),
            timeout_secs: None,
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<(Self, Vec<ConfigWarning>)> {
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Mistyped or out of range optional fields are reported and then
    /// ignored. A missing or mistyped `endpoint` is an error since no client
    /// can be bound to it; the warnings gathered so far are logged first.
    pub fn from_toml(value: &str) -> Result<(Self, Vec<ConfigWarning>)> {
        let mut table: Table = toml::from_str(value)?;
        let mut warnings = check_table(&table);

        for field in warnings.iter().filter_map(ConfigWarning::field) {
            if field != "endpoint" {
                table.remove(field);
            }
        }
        if !matches!(table.get("endpoint"), Some(Value::String(_))) {
            log_warnings(&warnings);
            return Err(Error::EndpointMissing);
        }

        let config: Self = Value::Table(table).try_into()?;
        warnings.extend(config.validate());
        Ok((config, warnings))
    }

    /// Returns the warnings for an already typed configuration.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if !self.endpoint.starts_with("http") {
            warnings.push(ConfigWarning::EndpointNotHttp(self.endpoint.clone()));
        }
        if self.host_url.is_some() {
            warnings.push(ConfigWarning::DeprecatedHostUrl);
        }
        warnings
    }
}
