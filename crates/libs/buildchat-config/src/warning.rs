//! Non-fatal configuration warnings.

use std::fmt;

use tracing::warn;

/// A configuration problem that is reported but never blocks startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A field holds a value of the wrong TOML type and was ignored.
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A field has the right type but an unsupported value and was ignored.
    InvalidValue { field: &'static str, value: String },
    /// The endpoint does not look like an HTTP(S) URL.
    EndpointNotHttp(String),
    /// `host_url` is still set. The full URL belongs in `endpoint`.
    DeprecatedHostUrl,
}

impl ConfigWarning {
    /// The field whose value is ignored because of this warning.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigWarning::WrongType { field, .. } | ConfigWarning::InvalidValue { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::WrongType {
                field,
                expected,
                found,
            } => write!(f, "{field} must be a {expected}, got '{found}' instead"),
            ConfigWarning::InvalidValue { field, value } => {
                write!(f, "{field} has an unsupported value '{value}', using the default")
            }
            ConfigWarning::EndpointNotHttp(endpoint) => {
                write!(f, "endpoint should start with \"http...\", endpoint: {endpoint}")
            }
            ConfigWarning::DeprecatedHostUrl => write!(
                f,
                "argument host_url is deprecated and will be removed in the next release: specify the full url as endpoint"
            ),
        }
    }
}

/// Logs every warning at warn level.
pub fn log_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        warn!("[buildchat] {warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_type_message_names_field_and_type() {
        let warning = ConfigWarning::WrongType {
            field: "channel",
            expected: "string",
            found: "integer",
        };
        assert_eq!(
            warning.to_string(),
            "channel must be a string, got 'integer' instead"
        );
    }

    #[test]
    fn ignored_field() {
        let invalid = ConfigWarning::InvalidValue {
            field: "timeout_secs",
            value: String::from("-5"),
        };
        assert_eq!(invalid.field(), Some("timeout_secs"));
        assert_eq!(
            invalid.to_string(),
            "timeout_secs has an unsupported value '-5', using the default"
        );
        assert_eq!(ConfigWarning::DeprecatedHostUrl.field(), None);
    }

    #[test]
    fn endpoint_message_contains_endpoint() {
        let warning = ConfigWarning::EndpointNotHttp(String::from("hooks.slack.com"));
        assert!(warning.to_string().contains("hooks.slack.com"));
    }
}
