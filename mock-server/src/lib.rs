use std::{path::Path as FsPath, path::PathBuf, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use uuid::Uuid;

const FIXTURE: &str = include_str!("../fixtures/feed.json");

/// One feed entry as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedItemRecord {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

/// The `{"items": [...]}` envelope served by every feed route.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub items: Vec<FeedItemRecord>,
}

impl Feed {
    /// The built-in eight item fixture.
    pub fn fixture() -> Result<Self, ServerError> {
        Ok(serde_json::from_str(FIXTURE)?)
    }

    pub fn from_path(path: &FsPath) -> Result<Self, ServerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ServerError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot read fixture {path:?}: {source}")]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid feed fixture: {0}")]
    InvalidFixture(#[from] serde_json::Error),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

/// Runtime settings read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub port: u16,
    pub fixture: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var_os("FEED_FIXTURE").map(PathBuf::from),
        )
    }

    fn from_vars(port: Option<String>, fixture: Option<PathBuf>) -> Result<Self, ServerError> {
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidPort(raw))?,
            None => 3000,
        };
        Ok(Self { port, fixture })
    }

    pub fn load_feed(&self) -> Result<Feed, ServerError> {
        match &self.fixture {
            Some(path) => Feed::from_path(path),
            None => Feed::fixture(),
        }
    }
}

pub type SharedFeed = Arc<Feed>;

pub fn app(feed: Feed) -> Router {
    Router::new()
        .route("/feed", get(get_feed))
        .route("/feed/status/{code}", get(get_feed_with_status))
        .route("/feed/malformed", get(get_malformed))
        .route("/feed/redirect", get(redirect_to_feed))
        .route("/feed/slow/{millis}", get(get_feed_slowly))
        .with_state(Arc::new(feed))
}

pub async fn run(listener: TcpListener, feed: Feed) -> Result<(), std::io::Error> {
    axum::serve(listener, app(feed)).await
}

async fn get_feed(State(feed): State<SharedFeed>) -> Json<Feed> {
    Json(feed.as_ref().clone())
}

async fn get_feed_with_status(
    State(feed): State<SharedFeed>,
    Path(code): Path<u16>,
) -> Result<(StatusCode, Json<Feed>), StatusCode> {
    if !(200..=599).contains(&code) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(feed.as_ref().clone())))
}

async fn get_malformed() -> (StatusCode, &'static str) {
    (StatusCode::OK, "invalid json")
}

async fn redirect_to_feed() -> Redirect {
    Redirect::temporary("/feed")
}

/// Serve the feed after holding the request for `millis` milliseconds.
async fn get_feed_slowly(State(feed): State<SharedFeed>, Path(millis): Path<u64>) -> Json<Feed> {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    Json(feed.as_ref().clone())
}
