//! Integration tests for the preview route.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use org_social_preview::config::Config;
use org_social_preview::web::{create_app, AppState};
use scraper::{Html, Selector};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Feed from the README scenario.
const FEED: &str = "\
#+TITLE: Alice's journal
#+NICK: alice
#+DESCRIPTION: Notes and things
#+AVATAR: /a.png

* Posts
**
:PROPERTIES:
:ID: 2025-02-03T23:05:00+0100
:MOOD: :)
:TAGS: foo,bar
:END:

Hello world
**
:PROPERTIES:
:ID: 2025-02-04T09:30:00+0100
:END:

Second post
";

const TIMESTAMP: &str = "2025-02-03T23:05:00+0100";

fn create_test_app(config: Config) -> Router {
    create_app(AppState::new(config).expect("Failed to create app state"))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn preview_uri(feed_url: &str, timestamp: &str) -> String {
    format!(
        "/?post={}",
        urlencoding::encode(&format!("{feed_url}#{timestamp}"))
    )
}

fn meta_property(html: &str, property: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
}

fn texts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

async fn serve_feed(server: &MockServer, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/social.org"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_preview_renders_card() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());

    let (status, html) = get(&app, &preview_uri(&feed_url, TIMESTAMP)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(texts(&html, ".nick"), vec!["alice"]);
    assert_eq!(texts(&html, ".post-content"), vec!["Hello world"]);
    assert_eq!(texts(&html, "li.tag"), vec!["#foo", "#bar"]);
    assert_eq!(texts(&html, ".mood"), vec![":)"]);

    let avatar = format!("{}/a.png", server.uri());
    assert_eq!(meta_property(&html, "og:title").as_deref(), Some("alice"));
    assert_eq!(
        meta_property(&html, "og:description").as_deref(),
        Some("Hello world")
    );
    assert_eq!(meta_property(&html, "og:image"), Some(avatar));
    assert_eq!(
        meta_property(&html, "og:url"),
        Some(format!("{feed_url}#{TIMESTAMP}"))
    );
    assert_eq!(
        meta_property(&html, "og:site_name").as_deref(),
        Some("Alice's journal")
    );
}

#[tokio::test]
async fn test_unknown_timestamp_renders_welcome_page() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());

    let (status, html) = get(&app, &preview_uri(&feed_url, "1999-01-01T00:00:00+0000")).await;
    let (_, welcome) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html, welcome);
}

#[tokio::test]
async fn test_missing_param_renders_welcome_without_fetch() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 0).await;
    let app = create_test_app(Config::for_testing());

    let (status, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(texts(&html, "h1"), vec!["Org Social Preview"]);
    assert!(texts(&html, ".post-content").is_empty());

    let (status, empty) = get(&app, "/?post=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, html);
}

#[tokio::test]
async fn test_malformed_param_renders_welcome_without_fetch() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 0).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());
    let (_, welcome) = get(&app, "/").await;

    // No fragment separator
    let uri = format!("/?post={}", urlencoding::encode(&feed_url));
    let (status, html) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html, welcome);

    // Not a URL
    let (status, html) = get(&app, "/?post=nonsense%23123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html, welcome);
}

#[tokio::test]
async fn test_repeated_request_is_served_from_cache() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());
    let uri = preview_uri(&feed_url, TIMESTAMP);

    let (_, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_document_cache_is_shared_between_posts() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());

    let (_, first) = get(&app, &preview_uri(&feed_url, TIMESTAMP)).await;
    let (_, second) = get(&app, &preview_uri(&feed_url, "2025-02-04T09:30:00+0100")).await;

    assert_eq!(texts(&first, ".post-content"), vec!["Hello world"]);
    assert_eq!(texts(&second, ".post-content"), vec!["Second post"]);
}

#[tokio::test]
async fn test_expired_caches_pick_up_changed_document() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let config = Config {
        cache_timeout: Duration::ZERO,
        cache_file_timeout: Duration::ZERO,
        ..Config::for_testing()
    };
    let app = create_test_app(config);
    let uri = preview_uri(&feed_url, TIMESTAMP);

    let (_, before) = get(&app, &uri).await;
    assert_eq!(texts(&before, ".post-content"), vec!["Hello world"]);

    server.reset().await;
    serve_feed(&server, &FEED.replace("Hello world", "Edited post"), 1).await;

    let (_, after) = get(&app, &uri).await;
    assert_eq!(texts(&after, ".post-content"), vec!["Edited post"]);
}

#[tokio::test]
async fn test_cached_card_outlives_document_change() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let config = Config {
        cache_file_timeout: Duration::ZERO,
        ..Config::for_testing()
    };
    let app = create_test_app(config);
    let uri = preview_uri(&feed_url, TIMESTAMP);

    let (_, before) = get(&app, &uri).await;

    server.reset().await;
    serve_feed(&server, &FEED.replace("Hello world", "Edited post"), 0).await;

    // The card cache has its own TTL and still holds the first render
    let (_, after) = get(&app, &uri).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_upstream_failure_renders_welcome_and_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/social.org"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());
    let (_, welcome) = get(&app, "/").await;
    let uri = preview_uri(&feed_url, TIMESTAMP);

    let (status, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, welcome);
    assert_eq!(second, welcome);
}

#[tokio::test]
async fn test_plus_in_unencoded_timestamp_is_restored() {
    let server = MockServer::start().await;
    serve_feed(&server, FEED, 1).await;
    let feed_url = format!("{}/social.org", server.uri());
    let app = create_test_app(Config::for_testing());

    // Only the `#` is encoded; the `+` arrives as a form-encoded space
    let uri = format!("/?post={feed_url}%23{TIMESTAMP}");
    let (status, html) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(texts(&html, ".nick"), vec!["alice"]);
}
