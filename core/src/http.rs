//! HTTP transport contract consumed by the loader.
//!
//! # Design
//! The loader never talks to the network itself. It hands a URL and a
//! completion callback to an `HttpClient` and reacts when the callback fires.
//! Production code plugs in `UreqHttpClient`; tests plug in spies that hold
//! on to the callbacks and complete them on demand.
//!
//! Retries, timeouts and redirects are decisions of the concrete client.

use url::Url;

use crate::error::TransportError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// URL the response originated from, after any redirects.
    pub url: Url,
    pub status: u16,
    pub body: Vec<u8>,
}

/// Outcome of one `HttpClient::get` call.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

/// Callback through which an `HttpClient` delivers its outcome.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Asynchronous GET transport.
///
/// Implementations must invoke `completion` exactly once per call, from any
/// thread. They may invoke it before `get` returns.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}
