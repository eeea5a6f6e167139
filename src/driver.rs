//! Runs a batch of reports through the formatter and the deliverer.

use buildchat_requests::WebhookTransport;
use tracing::{debug, error};

use crate::{
    delivery::{Deliverer, DeliveryOutcome},
    formatter::MessageFormatter,
    report::BuildReport,
};

/// Per-outcome counts for one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub delivered: usize,
    pub rejected: usize,
    pub transport_failed: usize,
    pub format_failed: usize,
}

impl BatchSummary {
    /// Number of builds seen.
    pub fn total(&self) -> usize {
        self.delivered + self.rejected + self.transport_failed + self.format_failed
    }

    fn record(&mut self, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.delivered += 1,
            DeliveryOutcome::Rejected { .. } => self.rejected += 1,
            DeliveryOutcome::TransportFailed(_) => self.transport_failed += 1,
        }
    }
}

/// Formats and delivers every build of every report, in order.
///
/// A build that cannot be formatted or delivered is logged and skipped; the
/// batch always runs to completion.
pub async fn run<T: WebhookTransport>(
    reports: &[BuildReport],
    formatter: &MessageFormatter,
    deliverer: &Deliverer<T>,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for build in reports.iter().flat_map(|report| &report.builds) {
        debug!("Formatting build {build:?}");
        let message = match formatter.format(build) {
            Ok(message) => message,
            Err(err) => {
                error!(
                    "[buildchat] Skipping build {}: {err}",
                    build.url.as_deref().unwrap_or("<unknown>")
                );
                summary.format_failed += 1;
                continue;
            }
        };
        let outcome = deliverer.deliver(&message).await;
        summary.record(&outcome);
    }

    debug!("Batch finished: {summary:?}");
    summary
}
