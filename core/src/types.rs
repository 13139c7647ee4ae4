//! Domain value type for the feed.
//!
//! # Design
//! `FeedItem` is the shape the rest of an application consumes. It is kept
//! apart from the wire records in `mapper` so the JSON field names (`image`)
//! never leak into the domain (`image_url`).

use url::Url;
use uuid::Uuid;

/// A single item of a remote feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
