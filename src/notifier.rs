//! The notifier service handed to the build host.

use std::time::Duration;

use buildchat_config::{MessageFormat, NotifierConfig};
use buildchat_requests::{WebhookClient, WebhookTransport};
use tracing::info;

use crate::{
    delivery::Deliverer,
    driver::{self, BatchSummary},
    formatter::MessageFormatter,
    prelude::*,
    report::BuildReport,
};

/// The parts of the configuration the pipeline reads at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifierSettings {
    pub format: MessageFormat,
    pub verbose: bool,
}

impl From<&NotifierConfig> for NotifierSettings {
    fn from(config: &NotifierConfig) -> Self {
        Self {
            format: config.format,
            verbose: config.verbose,
        }
    }
}

/// Formats and delivers build reports to one webhook.
pub struct Notifier<T> {
    formatter: MessageFormatter,
    deliverer: Deliverer<T>,
    verbose: bool,
}

impl Notifier<WebhookClient> {
    /// Builds a notifier with an HTTP client bound to `config.endpoint`.
    pub fn from_config(config: &NotifierConfig) -> Result<Self> {
        let client = match config.timeout_secs {
            Some(secs) => WebhookClient::with_timeout(&config.endpoint, Duration::from_secs(secs))?,
            None => WebhookClient::new(&config.endpoint)?,
        };
        Ok(Self::new(config.into(), client))
    }
}

impl<T: WebhookTransport> Notifier<T> {
    /// Creates a notifier from validated settings and a ready client.
    pub fn new(settings: NotifierSettings, transport: T) -> Self {
        Self {
            formatter: MessageFormatter::new(settings.format),
            deliverer: Deliverer::new(transport),
            verbose: settings.verbose,
        }
    }

    pub fn transport(&self) -> &T {
        self.deliverer.transport()
    }

    /// Sends one message per build in `reports`.
    pub async fn send_message(&self, reports: &[BuildReport]) -> BatchSummary {
        if self.verbose {
            for build in reports.iter().flat_map(|report| &report.builds) {
                match serde_json::to_string(build) {
                    Ok(raw) => info!("[buildchat] build: {raw}"),
                    Err(_) => info!("[buildchat] build: {build:?}"),
                }
            }
        }
        driver::run(reports, &self.formatter, &self.deliverer).await
    }
}
