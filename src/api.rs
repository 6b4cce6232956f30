use gloo_net::http::Request;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::controllers::email::{WaitlistClient, WaitlistError};

#[derive(Serialize)]
struct WaitlistRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Error bodies are optional JSON; anything unreadable just loses the message.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body).ok().and_then(|resp| resp.error)
}

#[derive(Clone, PartialEq)]
pub struct HttpWaitlistClient {
    url: String,
}

impl HttpWaitlistClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpWaitlistClient {
    fn default() -> Self {
        Self::new(config::waitlist_url())
    }
}

impl WaitlistClient for HttpWaitlistClient {
    async fn register(&self, email: &str) -> Result<(), WaitlistError> {
        let response = Request::post(&self.url)
            .json(&WaitlistRequest { email })
            .map_err(|e| WaitlistError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("Waitlist request failed: {}", e);
                WaitlistError::Network(e.to_string())
            })?;

        if response.ok() {
            info!("Joined waitlist");
            return Ok(());
        }

        let status = response.status();
        let message = response.text().await.ok().as_deref().and_then(error_message);
        warn!("Waitlist rejected submission with status {}: {:?}", status, message);
        Err(WaitlistError::Rejected { status, message })
    }
}
