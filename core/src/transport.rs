//! Blocking `ureq` transport behind the asynchronous `HttpClient` contract.
//!
//! # Design
//! Every `get` runs on its own worker thread, so callers never block. The agent
//! is configured with `http_status_as_error(false)`: 4xx/5xx responses come
//! back as data and status interpretation stays with the mapper. Only failures
//! that leave no response (DNS, refused connection, timeout, truncated body)
//! become a `TransportError`.

use std::thread;
use std::time::Duration;

use ureq::{Agent, ResponseExt};
use url::Url;

use crate::error::TransportError;
use crate::http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};

#[derive(Debug, Clone)]
pub struct UreqHttpClient {
    agent: Agent,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Client whose requests fail after `timeout` in total.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let agent = self.agent.clone();
        let url = url.clone();
        thread::spawn(move || completion(fetch(&agent, url)));
    }
}

fn fetch(agent: &Agent, url: Url) -> HttpClientResult {
    tracing::debug!(url = %url, "GET");
    let mut response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status().as_u16();
    // Redirects are followed; report where the body actually came from.
    let url = Url::parse(&response.get_uri().to_string()).unwrap_or(url);
    // Body size is not capped here; an oversized feed is still a response.
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(|e| TransportError::new(e.to_string()))?;
    tracing::trace!(url = %url, status, bytes = body.len(), "response received");

    Ok(HttpResponse { url, status, body })
}
