//! Kroki HTTP client.
//!
//! A render is a single POST of the diagram source to
//! `{kroki_base}/{kind}/svg`. There are no retries; the first failure is
//! returned to the caller.

use std::time::Duration;

use ureq::Agent;

use crate::consts::IMAGE_FORMAT;

/// Renders diagram source into SVG text.
pub trait RenderClient {
    /// Render `source` with the Kroki diagram type `kind`.
    fn render(&self, kind: &str, source: &str) -> Result<String, RenderError>;
}

impl<C: RenderClient + ?Sized> RenderClient for &C {
    fn render(&self, kind: &str, source: &str) -> Result<String, RenderError> {
        (**self).render(kind, source)
    }
}

/// Single render failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Kroki answered with a non-success status; `reason` is the response body.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("I/O error: {0}")]
    Io(String),
}

/// [`RenderClient`] backed by a Kroki server.
pub struct KrokiClient {
    base_url: String,
    /// HTTP agent for connection pooling (reused across render calls).
    agent: Agent,
}

impl std::fmt::Debug for KrokiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrokiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl KrokiClient {
    /// Create a client for the Kroki server at `base_url`.
    ///
    /// No timeout is configured; requests wait as long as the transport does.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            agent: create_agent(None),
        }
    }

    /// Set a global timeout for each render request.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.agent = create_agent(Some(timeout));
        self
    }

    /// Kroki URL for a diagram type.
    pub fn render_url(&self, kind: &str) -> String {
        format!("{}/{kind}/{IMAGE_FORMAT}", self.base_url)
    }
}

impl RenderClient for KrokiClient {
    fn render(&self, kind: &str, source: &str) -> Result<String, RenderError> {
        let url = self.render_url(kind);

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "text/plain")
            .send(source.as_bytes())
            .map_err(|e| RenderError::Http(e.to_string()))?;

        let status = response.status();
        let mut body = response.into_body();

        if !status.is_success() {
            let reason = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(RenderError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        body.read_to_string()
            .map_err(|e| RenderError::Io(e.to_string()))
    }
}

/// Create an HTTP agent that reports error statuses as responses.
///
/// Error bodies carry Kroki's explanation, so they must stay readable.
fn create_agent(timeout: Option<Duration>) -> Agent {
    Agent::config_builder()
        .timeout_global(timeout)
        .http_status_as_error(false)
        .build()
        .into()
}
