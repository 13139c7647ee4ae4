//! Translation of a raw HTTP response into feed items.
//!
//! # Design
//! `map` is pure: it looks only at the status code and the body bytes. The
//! wire records (`Root`, `Item`) stay private so the API's field names are
//! free to differ from `FeedItem`.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::LoadError;
use crate::types::FeedItem;

const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Decode a feed response.
///
/// Only a status of exactly 200 is accepted; the body of any other response is
/// never read. A single invalid record rejects the whole feed.
pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedItem>, LoadError> {
    if status != OK_200 {
        return Err(LoadError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|_| LoadError::InvalidData)?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
