//! End-to-end loading against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `RemoteFeedLoader`
//! with the real `UreqHttpClient` over HTTP. Catches schema drift between the
//! server's fixture records and the core's wire decoding.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use feed_core::{
    FeedLoader, HttpClient, HttpClientResult, LoadError, LoadResult, RemoteFeedLoader,
    UreqHttpClient, Url, Uuid,
};
use mock_server::{Feed, FeedItemRecord};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serve `feed` on a random local port and return the base URL.
fn start_server(feed: Feed) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, feed).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn loader(url: &str) -> RemoteFeedLoader {
    RemoteFeedLoader::new(
        Url::parse(url).unwrap(),
        Arc::new(UreqHttpClient::with_timeout(TIMEOUT)),
    )
}

fn load_blocking(loader: &RemoteFeedLoader) -> LoadResult {
    let (tx, rx) = mpsc::channel();
    loader.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.recv_timeout(TIMEOUT * 2).expect("load did not complete")
}

#[test]
fn feed_endpoint_matches_fixture_data() {
    let base = start_server(Feed::fixture().unwrap());
    let items = load_blocking(&loader(&format!("{base}/feed"))).unwrap();

    let fixture = Feed::fixture().unwrap();
    assert_eq!(items.len(), 8);
    for (item, record) in items.iter().zip(&fixture.items) {
        assert_eq!(item.id, record.id);
        assert_eq!(item.description, record.description);
        assert_eq!(item.location, record.location);
        assert_eq!(item.image_url, Url::parse(&record.image).unwrap());
    }
}

#[test]
fn empty_feed_loads_as_empty_list() {
    let base = start_server(Feed::default());
    let items = load_blocking(&loader(&format!("{base}/feed"))).unwrap();
    assert!(items.is_empty());
}

#[test]
fn non_200_status_is_invalid_data() {
    let base = start_server(Feed::fixture().unwrap());
    for code in [201, 404, 500] {
        let result = load_blocking(&loader(&format!("{base}/feed/status/{code}")));
        assert_eq!(result, Err(LoadError::InvalidData), "status {code}");
    }
}

#[test]
fn status_route_with_200_succeeds() {
    let base = start_server(Feed::fixture().unwrap());
    let items = load_blocking(&loader(&format!("{base}/feed/status/200"))).unwrap();
    assert_eq!(items.len(), 8);
}

#[test]
fn malformed_body_is_invalid_data() {
    let base = start_server(Feed::fixture().unwrap());
    let result = load_blocking(&loader(&format!("{base}/feed/malformed")));
    assert_eq!(result, Err(LoadError::InvalidData));
}

#[test]
fn unreachable_server_is_connectivity_error() {
    // Bind then release a port so nothing is listening on it.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let result = load_blocking(&loader(&format!("http://{addr}/feed")));
    assert_eq!(result, Err(LoadError::Connectivity));
}

#[test]
fn concurrent_loads_complete_independently() {
    let base = start_server(Feed::fixture().unwrap());
    let loader = loader(&format!("{base}/feed"));

    let (tx, rx) = mpsc::channel();
    for _ in 0..4 {
        let tx = tx.clone();
        loader.load(Box::new(move |result| {
            let _ = tx.send(result);
        }));
    }
    drop(tx);

    let results: Vec<LoadResult> = (0..4).map(|_| rx.recv_timeout(TIMEOUT * 2).unwrap()).collect();
    assert!(results.iter().all(|r| r.as_ref().map(Vec::len) == Ok(8)));
}

#[test]
fn feed_larger_than_ten_megabytes_loads() {
    let items = (0..60_000)
        .map(|i| FeedItemRecord {
            id: Uuid::new_v4(),
            description: Some(format!("description for item number {i}")),
            location: Some(format!("location {i}")),
            image: format!("https://images.example.com/feed/{i}.png"),
        })
        .collect();
    let feed = Feed { items };
    let size = serde_json::to_vec(&feed).unwrap().len();
    assert!(size > 10 * 1024 * 1024, "fixture is only {size} bytes");

    let base = start_server(feed);
    let result = load_blocking(&loader(&format!("{base}/feed")));
    assert_eq!(result.map(|items| items.len()), Ok(60_000));
}

#[test]
fn dropped_loader_never_completes_in_flight_load() {
    let base = start_server(Feed::fixture().unwrap());
    let loader = loader(&format!("{base}/feed/slow/500"));

    let (tx, rx) = mpsc::channel::<LoadResult>();
    loader.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    drop(loader);

    // The worker thread finishes the request and drops the completion unused.
    assert_eq!(
        rx.recv_timeout(TIMEOUT * 2),
        Err(mpsc::RecvTimeoutError::Disconnected)
    );
}

#[test]
fn redirected_response_reports_final_url() {
    let base = start_server(Feed::fixture().unwrap());
    let requested = Url::parse(&format!("{base}/feed/redirect")).unwrap();

    let (tx, rx) = mpsc::channel::<HttpClientResult>();
    UreqHttpClient::with_timeout(TIMEOUT).get(
        &requested,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let response = rx.recv_timeout(TIMEOUT * 2).unwrap().unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.url, Url::parse(&format!("{base}/feed")).unwrap());
}
