use std::borrow::Cow;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::pages;
use super::AppState;
use crate::social::locate_post;

/// Create the router. There is exactly one route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(preview))
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    post: Option<String>,
}

/// A parsed `post` parameter: which feed, and which post in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub feed_url: Url,
    pub timestamp: String,
}

impl PostRequest {
    /// Normalized key for the card cache: serialized feed URL + `#` + timestamp.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}#{}", self.feed_url, self.timestamp)
    }
}

/// Split a `post` parameter into feed URL and timestamp.
///
/// The value is percent-decoded once more, since shared links often arrive
/// double-encoded. Returns `None` when there is no `#`, the timestamp is
/// empty, or the feed URL is not a valid http(s) URL.
#[must_use]
pub fn parse_post_param(raw: &str) -> Option<PostRequest> {
    let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    let (base, timestamp) = decoded.trim().split_once('#')?;

    // Form decoding turns the `+` of a UTC offset into a space
    let timestamp = timestamp.trim().replace(' ', "+");
    if timestamp.is_empty() {
        return None;
    }

    let feed_url = Url::parse(base.trim()).ok()?;
    if !matches!(feed_url.scheme(), "http" | "https") {
        return None;
    }

    Some(PostRequest {
        feed_url,
        timestamp,
    })
}

/// Why no card was rendered. Every reason shows the same welcome page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WelcomeReason {
    MissingParam,
    Malformed,
    NotFound,
    Unreachable,
}

#[derive(Debug)]
enum Resolution {
    Card(String),
    Welcome(WelcomeReason),
}

async fn preview(State(state): State<AppState>, params: Option<Query<PreviewParams>>) -> Response {
    let raw = params
        .and_then(|Query(p)| p.post)
        .filter(|p| !p.trim().is_empty());

    match resolve(&state, raw.as_deref()).await {
        Resolution::Card(html) => Html(html).into_response(),
        Resolution::Welcome(reason) => {
            debug!(?reason, post = raw.as_deref(), "Serving welcome page");
            Html(state.welcome_page.to_string()).into_response()
        }
    }
}

async fn resolve(state: &AppState, raw: Option<&str>) -> Resolution {
    let Some(raw) = raw else {
        return Resolution::Welcome(WelcomeReason::MissingParam);
    };
    let Some(request) = parse_post_param(raw) else {
        return Resolution::Welcome(WelcomeReason::Malformed);
    };

    let key = request.cache_key();
    if let Some(html) = state.cards.get(&key) {
        debug!(key = %key, "Card cache hit");
        return Resolution::Card(html);
    }

    let Ok(document) = state.documents.fetch(&request.feed_url).await else {
        return Resolution::Welcome(WelcomeReason::Unreachable);
    };

    let Some(post) = locate_post(&document, &request.feed_url, &request.timestamp) else {
        return Resolution::Welcome(WelcomeReason::NotFound);
    };

    let html = pages::render_post_page(&post).into_string();
    info!(key = %key, nick = %post.nick, "Rendered preview card");
    state.cards.insert(key, html.clone());

    Resolution::Card(html)
}
