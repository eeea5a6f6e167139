//! In-memory webhook used by unit tests.

use std::{collections::VecDeque, sync::Mutex};

use buildchat_requests::{WebhookResponse, WebhookTransport, prelude::*};
use serde::Serialize;
use serde_json::Value;

/// Replays queued replies and records every body it was given.
///
/// Once the queue is empty every post gets a `200 ok`.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<WebhookResponse>>>,
    bodies: Mutex<Vec<Value>>,
}

impl MockTransport {
    pub fn with_replies(replies: impl IntoIterator<Item = Result<WebhookResponse>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            bodies: Mutex::default(),
        }
    }

    pub fn status(status: u16, body: &str) -> Result<WebhookResponse> {
        Ok(WebhookResponse {
            status,
            body: body.to_string(),
        })
    }

    /// A failure as raised for an unreadable response.
    pub fn broken() -> Result<WebhookResponse> {
        Err(Error::Json(serde_json::from_str::<Value>("{").unwrap_err()))
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

impl WebhookTransport for MockTransport {
    async fn post_json<T: Serialize + Sync>(&self, body: &T) -> Result<WebhookResponse> {
        self.bodies.lock().unwrap().push(serde_json::to_value(body)?);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Self::status(200, "ok"))
    }
}
