pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod source;
pub mod templates;
pub mod view;

pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use source::{CatalogProducts, ProductQuery, SessionUser, UserQuery};
use templates::RenderOptions;

/// Format latency in human-readable units
fn format_latency(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1000)
    } else {
        format!("{:.1}s", micros as f64 / 1_000_000.0)
    }
}

pub struct AppState {
    pub user: Arc<dyn UserQuery>,
    pub products: Arc<dyn ProductQuery>,
    pub denied_path: String,
    pub render_options: RenderOptions,
    pub app_version: String,
}

// Arc wrapper for shared state
pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub fn new(user: Arc<dyn UserQuery>, products: Arc<dyn ProductQuery>) -> Self {
        Self {
            user,
            products,
            denied_path: config::DEFAULT_DENIED_PATH.to_string(),
            render_options: RenderOptions::default(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let catalog = catalog::Catalog::new(config.catalog_path());
        Ok(Self {
            denied_path: config.denied_route()?,
            render_options: config.render_options(),
            ..Self::new(
                Arc::new(SessionUser::new(config.user_profile())),
                Arc::new(CatalogProducts::new(catalog)),
            )
        })
    }

    pub fn with_denied_path(mut self, path: &str) -> Result<Self, ConfigError> {
        self.denied_path = config::validate_denied_path(path)?;
        Ok(self)
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }
}

pub fn create_app(state: SharedAppState) -> Router {
    let denied_path = state.denied_path.clone();

    Router::new()
        .route("/products/:sku", get(handlers::product_detail))
        .route("/products/:sku/state", get(handlers::product_state))
        .route(&denied_path, get(handlers::access_denied))
        .route("/health", get(handlers::health_check))
        .route("/style.css", get(handlers::serve_css))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    static REQUEST_ID: AtomicU64 = AtomicU64::new(1);
                    let request_id_num = REQUEST_ID.fetch_add(1, Ordering::Relaxed);
                    let generator = block_id::BlockId::new(
                        block_id::Alphabet::alphanumeric(),
                        1234,
                        5,
                    );
                    let request_id = generator
                        .encode_string(request_id_num)
                        .unwrap_or_else(|| request_id_num.to_string());
                    tracing::info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &Span| {
                    tracing::info!("-> {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::info!(
                            "<- {} latency={}",
                            response.status().as_u16(),
                            format_latency(latency)
                        );
                    },
                ),
        )
        .layer(CompressionLayer::new())
}
