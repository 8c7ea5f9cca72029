//! HTTP acquisition against a local mock server.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use quakemap_client::{Error, FeedClient, FeedLocation};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUAKES: &str = r#"{
  "type": "FeatureCollection",
  "metadata": { "title": "USGS All Earthquakes, Past Week", "count": 2 },
  "features": [
    { "type": "Feature", "properties": { "mag": 4.5, "title": "M 4.5 - Bay Area" },
      "geometry": { "type": "Point", "coordinates": [-122.4, 37.8, 5] } },
    { "type": "Feature", "properties": { "mag": 1.0, "title": "M 1.0 - Nowhere" },
      "geometry": null }
  ]
}"#;

const PLATES: &str = r#"{ "type": "FeatureCollection", "features": [
  { "type": "Feature", "properties": { "Name": "NA-PA" },
    "geometry": { "type": "LineString", "coordinates": [[-124.0, 40.3], [-125.0, 40.4]] } }
] }"#;

async fn server_with_feeds() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary/all_week.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(QUAKES))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plates/PB2002_boundaries.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PLATES))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn location(server: &MockServer, suffix: &str) -> FeedLocation {
    FeedLocation::parse(&format!("{}{suffix}", server.uri()))
}

#[tokio::test]
async fn test_acquire_over_http() {
    let server = server_with_feeds().await;
    let client = FeedClient::standard(Some(Duration::from_secs(5))).unwrap();

    let acquired = client
        .acquire(
            &location(&server, "/summary/all_week.geojson"),
            &location(&server, "/plates/PB2002_boundaries.json"),
        )
        .await
        .unwrap();

    assert_eq!(acquired.feed.features.len(), 2);
    assert_eq!(acquired.feed.features[0].title(), "M 4.5 - Bay Area");
    assert_eq!(acquired.boundaries.feature_count(), Some(1));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary/all_week.geojson"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = FeedClient::standard(None).unwrap();
    let err = client
        .fetch_earthquakes(&location(&server, "/summary/all_week.geojson"))
        .await
        .unwrap_err();

    let Error::Status { url, status } = err else {
        unreachable!("Expected Status error");
    };
    assert_eq!(status, 503);
    assert!(url.ends_with("/summary/all_week.geojson"));
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PLATES)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = FeedClient::standard(Some(Duration::from_millis(100))).unwrap();
    let err = client
        .fetch_boundaries(&location(&server, "/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary/all_week.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = FeedClient::standard(None).unwrap();
    let err = client
        .fetch_earthquakes(&location(&server, "/summary/all_week.geojson"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
