//! Turns a build record into the text posted to the chat channel.

use buildchat_config::MessageFormat;

use crate::report::{Build, Property};

/// A build lacks a field the host promises to always populate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("build record is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Fields every message needs.
struct Required<'a> {
    reason: &'a str,
    state: &'a str,
    url: &'a str,
}

impl<'a> Required<'a> {
    fn from_build(build: &'a Build) -> Result<Self, FormatError> {
        Ok(Self {
            reason: build.reason().ok_or(FormatError::MissingField("buildset.reason"))?,
            state: build
                .state_string
                .as_deref()
                .ok_or(FormatError::MissingField("state_string"))?,
            url: build
                .url
                .as_deref()
                .ok_or(FormatError::MissingField("url"))?,
        })
    }
}

/// Formats builds into delivery ready text.
///
/// Formatting is a pure function of the build: the same record always yields
/// the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter {
    layout: MessageFormat,
}

impl MessageFormatter {
    pub fn new(layout: MessageFormat) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> MessageFormat {
        self.layout
    }

    /// Formats one build.
    pub fn format(&self, build: &Build) -> Result<String, FormatError> {
        let required = Required::from_build(build)?;
        Ok(match self.layout {
            MessageFormat::Detailed => detailed(build, &required),
            MessageFormat::Compact => compact(build, &required),
        })
    }
}

/// Labeled lines, optional ones only when their property key exists.
fn detailed(build: &Build, required: &Required<'_>) -> String {
    let properties = &build.properties;
    let mut msg = String::new();

    let labeled = [
        ("Scheduler", properties.scheduler()),
        ("Builder", properties.builder_name()),
        ("Worker", properties.worker_name()),
    ];
    for (label, property) in labeled {
        if let Some(property) = property {
            msg.push_str(&format!("{label}: {}\n", property.value_text()));
        }
    }

    msg.push_str(&format!("Reason: {}\n", required.reason));
    msg.push_str(&format!("State: {}\n", required.state));
    if let Some(branch) = properties.branch() {
        msg.push_str(&format!("Branch: {}\n", branch.value_text()));
    }
    if let Some(pr_url) = properties.pull_request_url() {
        msg.push_str(&format!("{}\n\n", pr_url.value_text()));
    }
    msg.push_str(&format!("{}\n\n", required.url));
    if let Some(users) = &build.users {
        msg.push_str(&format!("{users}\n\n"));
    }
    msg.push('\n');
    msg
}

/// Headline `state - branch - reason` followed by result and links.
fn compact(build: &Build, required: &Required<'_>) -> String {
    let properties = &build.properties;
    let branch = properties
        .branch()
        .map(Property::value_text)
        .unwrap_or_default();

    let mut msg = format!("{} - {branch} - {}\n", required.state, required.reason);
    if let Some(result) = build.results.as_ref().filter(|r| r.is_notable()) {
        msg.push_str(&format!("{result}\n"));
    }
    if let Some(pr_url) = properties
        .pull_request_url()
        .map(Property::value_text)
        .filter(|url| !url.is_empty())
    {
        msg.push_str(&format!("{pr_url}\n"));
    }
    msg.push_str(&format!("{}\n", required.url));
    if let Some(users) = &build.users {
        msg.push_str(&users.to_string());
    }
    msg.push('\n');
    msg
}
