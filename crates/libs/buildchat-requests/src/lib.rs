//! HTTP transport for posting messages to a chat webhook.
//!
//! [`WebhookTransport`] is the seam the notifier is written against: a client
//! bound to a single base URL that can POST a JSON body and hand back the
//! status code and the response text. [`WebhookClient`] is the `reqwest`
//! implementation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use buildchat_requests::{WebhookClient, WebhookTransport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::new("https://hooks.slack.com/services/T000/B000/XXXX")?;
//! let response = client.post_json(&serde_json::json!({ "text": "hello" })).await?;
//! assert!(response.is_ok());
//! # Ok(())
//! # }
//! ```

use std::{future::Future, time::Duration};

use reqwest::{StatusCode, Url, header};
use serde::Serialize;
use tracing::trace;

use crate::prelude::*;

pub mod error;
pub mod prelude;

/// Status and body returned by the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl WebhookResponse {
    /// Only `200 OK` counts as a successful delivery.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// A client bound to one webhook URL.
///
/// Implementations must be safe to share between concurrent posts.
pub trait WebhookTransport: Send + Sync {
    /// POSTs `body` as JSON to the bound URL.
    fn post_json<T: Serialize + Sync>(
        &self,
        body: &T,
    ) -> impl Future<Output = Result<WebhookResponse>> + Send;
}

/// `reqwest` backed webhook client.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: Url,
    client: reqwest::Client,
}

impl WebhookClient {
    /// Creates a client for the given endpoint with no request timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::build(endpoint, None)
    }

    /// Creates a client whose requests fail after `timeout`.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        Self::build(endpoint, Some(timeout))
    }

    fn build(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|err| Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url,
            client: builder.build()?,
        })
    }

    /// The URL every post goes to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl WebhookTransport for WebhookClient {
    async fn post_json<T: Serialize + Sync>(&self, body: &T) -> Result<WebhookResponse> {
        let payload = serde_json::to_string(body)?;
        trace!("POST {} {payload}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .body(payload)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(WebhookResponse { status, body })
    }
}
