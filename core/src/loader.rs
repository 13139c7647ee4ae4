//! Remote feed loader.
//!
//! # Design
//! `RemoteFeedLoader` holds a fixed URL and an injected `HttpClient`. Each
//! `load` issues one independent GET; nothing is shared between calls, so
//! overlapping loads need no locking.
//!
//! The loader owns an `Arc<()>` liveness token. Completion closures handed to
//! the client capture only a `Weak` to it, so a pending request never keeps the
//! loader alive. When the transport result arrives after the loader has been
//! dropped, the `Weak` no longer upgrades and the result is discarded without
//! notifying the caller.

use std::sync::{Arc, Weak};

use url::Url;

use crate::error::LoadError;
use crate::http::{HttpClient, HttpClientResult};
use crate::mapper;
use crate::types::FeedItem;

pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the outcome of one `load`.
pub type FeedCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Application-facing source of feed items.
pub trait FeedLoader {
    fn load(&self, completion: FeedCompletion);
}

impl<L: FeedLoader + ?Sized> FeedLoader for Arc<L> {
    fn load(&self, completion: FeedCompletion) {
        (**self).load(completion)
    }
}

/// Loads a feed from a single URL through an `HttpClient`.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedCompletion) {
        tracing::debug!(url = %self.url, "loading feed");
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    tracing::trace!("loader dropped before response arrived, discarding result");
                    return;
                }
                completion(translate(result));
            }),
        );
    }
}

fn translate(result: HttpClientResult) -> LoadResult {
    match result {
        Ok(response) => mapper::map(&response.body, response.status),
        Err(_) => Err(LoadError::Connectivity),
    }
}

impl std::fmt::Debug for RemoteFeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
