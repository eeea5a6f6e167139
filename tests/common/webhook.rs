//! Local stand-in for the chat webhook service.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use axum::{Router, extract::State, http::StatusCode, routing::post};

#[derive(Default)]
pub struct WebhookState {
    replies: Mutex<VecDeque<(StatusCode, &'static str)>>,
    received: Mutex<Vec<String>>,
}

impl WebhookState {
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

async fn hook(
    State(state): State<Arc<WebhookState>>,
    body: String,
) -> (StatusCode, &'static str) {
    state.received.lock().unwrap().push(body);
    state
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, "ok"))
}

/// Serves the webhook on an ephemeral port.
///
/// Each post consumes the next queued reply, then `200 ok` is returned.
pub async fn spawn(
    replies: Vec<(StatusCode, &'static str)>,
) -> (String, Arc<WebhookState>) {
    let state = Arc::new(WebhookState {
        replies: Mutex::new(replies.into()),
        received: Mutex::default(),
    });
    let app = Router::new()
        .route("/services/T000/B000", post(hook))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind webhook listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move { axum::serve(listener, app).await });
    (format!("http://{addr}/services/T000/B000"), state)
}

/// An address nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}/services/T000/B000")
}
