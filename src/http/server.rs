//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the page fallback handler
//! - Mount the static stylesheet directory
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{Html, IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::pipeline::{self, SiteContext};
use crate::routing::table::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub ctx: Arc<SiteContext>,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server from a validated config and compiled table.
    pub fn new(config: SiteConfig, table: RouteTable) -> Self {
        let state = AppState {
            table: Arc::new(table),
            ctx: Arc::new(SiteContext::from_config(&config)),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = Router::new();
        if !config.assets.dir.is_empty() {
            router = router.nest_service(
                config.assets.mount.as_str(),
                ServeDir::new(&config.assets.dir),
            );
        }
        router
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Page fallback handler: everything not served from the asset mount
/// goes through the rendering pipeline.
async fn page_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request.request_id().unwrap_or("unknown").to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    tracing::debug!(
        request_id = %request_id,
        path = %path,
        "Rendering page"
    );

    let document = pipeline::respond(&state.table, &state.ctx, &path, query.as_deref());

    tracing::info!(
        request_id = %request_id,
        path = %path,
        status = document.status.as_u16(),
        "Request completed"
    );

    (document.status, Html(document.html)).into_response()
}
