//! Posting formatted messages to the webhook.

use buildchat_requests::{WebhookTransport, error::Error as TransportError};
use serde::Serialize;
use tracing::error;

/// JSON body expected by the chat webhook.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WebhookPayload<'a> {
    pub text: &'a str,
}

/// Result of a single delivery attempt.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The webhook answered `200 OK`.
    Delivered,
    /// The webhook answered with any other status.
    Rejected { status: u16, body: String },
    /// No usable response was received.
    TransportFailed(TransportError),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Sends messages through an injected transport, one attempt each.
#[derive(Debug)]
pub struct Deliverer<T> {
    transport: T,
}

impl<T: WebhookTransport> Deliverer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts `message` once. Failures are logged and returned, never raised.
    pub async fn deliver(&self, message: &str) -> DeliveryOutcome {
        let payload = WebhookPayload { text: message };
        match self.transport.post_json(&payload).await {
            Ok(response) if response.is_ok() => DeliveryOutcome::Delivered,
            Ok(response) => {
                error!(
                    "[buildchat] {}: unable to upload status: {}",
                    response.status, response.body
                );
                DeliveryOutcome::Rejected {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(err) => {
                error!("[buildchat] Failed to send status: {err}");
                DeliveryOutcome::TransportFailed(err)
            }
        }
    }
}
