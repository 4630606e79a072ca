use chatview_types::{ChatEvent, NewChatEvent};
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;

use crate::{Error, Result};

/// Query key of the event list.
pub const EVENTS_KEY: &str = "events";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer "current data or an error" for a query key.
///
/// Views depend on this seam instead of on the transport, so the caching
/// policy and the HTTP client can be swapped independently.
pub trait EventSource: Send + Sync {
    fn fetch(&self, key: &str) -> impl Future<Output = Result<Vec<ChatEvent>>> + Send;
}

/// Events API client.
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEventSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("chatview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{key}`, concatenated as-is.
    pub fn endpoint(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Send one event to the ingest endpoint (`POST {base_url}`).
    ///
    /// Returns the stored event when the server echoes it back; older servers
    /// reply with an empty body. A non-empty body that is not an event is an error.
    pub async fn post_event(&self, event: &NewChatEvent) -> Result<Option<ChatEvent>> {
        tracing::debug!(url = %self.base_url, model = %event.model, "posting event");

        let response = self.client.post(&self.base_url).json(event).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|err| Error::Decode(err.to_string()))
    }
}

impl EventSource for HttpEventSource {
    async fn fetch(&self, key: &str) -> Result<Vec<ChatEvent>> {
        let url = self.endpoint(key);
        tracing::debug!(%url, "fetching events");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%url, %status, "events request failed");
            return Err(Error::Status(status));
        }

        // An empty store may be encoded as `null` rather than `[]`.
        let events: Vec<ChatEvent> = response
            .json::<Option<Vec<ChatEvent>>>()
            .await
            .map_err(|err| Error::Decode(err.to_string()))?
            .unwrap_or_default();

        tracing::debug!(count = events.len(), "fetched events");
        Ok(events)
    }
}
