//! Remote feed loading core.
//!
//! # Overview
//! Fetches a JSON feed over HTTP and decodes it into `FeedItem` values. The
//! caller hands a completion to `FeedLoader::load` and receives either the
//! items or one of two `LoadError` kinds.
//!
//! # Design
//! - `HttpClient` is the only seam to the network. `RemoteFeedLoader` receives
//!   one at construction; there is no global client.
//! - `mapper::map` is a pure function of status and body, tested without I/O.
//! - `RemoteFeedLoader` never notifies a caller after it has been dropped.
//! - `UreqHttpClient` is the production transport.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod transport;
pub mod types;

pub use error::{LoadError, TransportError};
pub use http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
pub use loader::{FeedCompletion, FeedLoader, LoadResult, RemoteFeedLoader};
pub use transport::UreqHttpClient;
pub use types::FeedItem;
pub use url::Url;
pub use uuid::Uuid;
