pub mod pages;
mod routes;

pub use routes::{parse_post_param, PostRequest};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::fetcher::{CachedSource, DocumentSource, HttpSource};

/// Shared application state.
///
/// The two caches are the only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Feed documents, cached by URL for `cache_file_timeout`.
    pub documents: Arc<dyn DocumentSource>,
    /// Rendered cards, cached by request key for `cache_timeout`.
    pub cards: Arc<TtlCache<String, String>>,
    /// The welcome page never changes after startup.
    pub welcome_page: Arc<str>,
}

impl AppState {
    /// Build state that fetches feeds over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let source =
            HttpSource::new(config.fetch_timeout).context("Failed to create HTTP client")?;
        Ok(Self::with_source(config, source))
    }

    /// Build state around any document source, wrapped in the file cache.
    pub fn with_source<S>(config: Config, source: S) -> Self
    where
        S: DocumentSource + 'static,
    {
        let documents = CachedSource::new(source, config.cache_file_timeout);
        let welcome_page = pages::render_welcome_page(&config.public_url()).into_string();

        Self {
            cards: Arc::new(TtlCache::new(config.cache_timeout)),
            documents: Arc::new(documents),
            welcome_page: welcome_page.into(),
            config: Arc::new(config),
        }
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::new(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
