//! Per-request page pipeline.
//!
//! # Data Flow
//! ```text
//! request path (+ query)
//!     → RouteTable::resolve (chain + params, None → NotFound)
//!     → loaders, top-down (first failure short-circuits)
//!     → metadata resolver (leaf wins, default fallback)
//!     → components, bottom-up (child fragment fills the parent outlet)
//!     → shell composer (chrome + stylesheets + fragment)
//!     → RenderedDocument { status, html }
//!
//! Failures re-enter at the presenter and flow through the same shell.
//! ```
//!
//! # Design Decisions
//! - One request is handled end-to-end in one task; stages run
//!   sequentially with no fan-out
//! - Everything is recomputed per request; no caching layer
//! - Unexpected failures are logged here with the request path; the
//!   response body never carries the detail unless dev mode is on

use axum::http::StatusCode;
use maud::Markup;

use crate::config::schema::{ChromeConfig, SiteConfig, StylesheetLink};
use crate::render::metadata::{self, PageMetadata};
use crate::render::presenter::{self, Failure};
use crate::render::shell;
use crate::routing::table::{PageRequest, RouteTable};

/// Site-wide rendering inputs, fixed at startup.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub default_metadata: PageMetadata,
    pub dev_mode: bool,
    pub global_stylesheets: Vec<StylesheetLink>,
    pub chrome: ChromeConfig,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut default_metadata = PageMetadata::new(config.site.title.clone());
        default_metadata.description = config.site.description.clone();
        Self {
            default_metadata,
            dev_mode: config.site.dev_mode,
            global_stylesheets: config.assets.global_stylesheets.clone(),
            chrome: config.chrome.clone(),
        }
    }
}

/// The final product of the pipeline: a full HTML document and its
/// HTTP status. Produced fresh per request, never cached.
#[derive(Debug)]
pub struct RenderedDocument {
    pub status: StatusCode,
    pub html: String,
}

/// Run the whole pipeline for one request.
///
/// Never returns an error: every failure is converted into an error
/// document with the appropriate status.
pub fn respond(
    table: &RouteTable,
    ctx: &SiteContext,
    path: &str,
    query: Option<&str>,
) -> RenderedDocument {
    match try_page(table, ctx, path, query) {
        Ok(document) => document,
        Err(failure) => {
            if let Failure::Unexpected(detail) = &failure {
                tracing::error!(path, error = %detail, "page pipeline failed unexpectedly");
            } else {
                tracing::debug!(path, outcome = ?failure, "request ended in a caught failure");
            }
            let (metadata, fragment) = presenter::present(&failure, ctx.dev_mode);
            let html = shell::compose(
                fragment,
                &metadata,
                &ctx.global_stylesheets,
                &[],
                &ctx.chrome,
            );
            RenderedDocument {
                status: failure.status(),
                html: html.into_string(),
            }
        }
    }
}

fn try_page(
    table: &RouteTable,
    ctx: &SiteContext,
    path: &str,
    query: Option<&str>,
) -> Result<RenderedDocument, Failure> {
    let resolved = table.resolve(path).ok_or(Failure::NotFound)?;

    let request = PageRequest {
        path: path.to_string(),
        query: query.map(str::to_string),
        params: resolved.params,
    };

    // Loaders run top-down so a layout failure wins over its child's.
    let mut payloads = Vec::with_capacity(resolved.chain.len());
    for route in &resolved.chain {
        payloads.push((route.loader)(&request).map_err(Failure::from)?);
    }

    let metadata = metadata::resolve(&resolved.chain, &payloads, &ctx.default_metadata);
    let route_stylesheets: Vec<StylesheetLink> = resolved
        .chain
        .iter()
        .flat_map(|route| route.stylesheets.iter().cloned())
        .collect();

    // Components render bottom-up; each fragment fills its parent's outlet.
    let mut outlet: Option<Markup> = None;
    for (route, payload) in resolved.chain.iter().zip(&payloads).rev() {
        outlet = Some((route.component)(payload, outlet.take()).map_err(Failure::from)?);
    }
    let fragment = outlet.unwrap_or_else(|| maud::html! {});

    let html = shell::compose(
        fragment,
        &metadata,
        &ctx.global_stylesheets,
        &route_stylesheets,
        &ctx.chrome,
    );

    Ok(RenderedDocument {
        status: StatusCode::OK,
        html: html.into_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::{LoadError, RenderError, Route};
    use maud::html;
    use serde_json::{json, Value};

    fn ok_loader(_req: &PageRequest) -> Result<Value, LoadError> {
        Ok(json!({ "greeting": "hello" }))
    }

    fn missing_loader(_req: &PageRequest) -> Result<Value, LoadError> {
        Err(LoadError::NotFound)
    }

    fn denied_loader(_req: &PageRequest) -> Result<Value, LoadError> {
        Err(LoadError::Unauthorized)
    }

    fn broken_loader(_req: &PageRequest) -> Result<Value, LoadError> {
        Err(LoadError::Unexpected("upstream data source unreachable".into()))
    }

    fn greeting_component(data: &Value, _outlet: Option<Markup>) -> Result<Markup, RenderError> {
        let greeting = data["greeting"].as_str().unwrap_or_default().to_string();
        Ok(html! { p class="greeting" { (greeting) } })
    }

    fn table() -> RouteTable {
        RouteTable::build(vec![
            Route::new("home", "/", ok_loader, greeting_component).unwrap(),
            Route::new("missing", "/missing", missing_loader, greeting_component).unwrap(),
            Route::new("private", "/private", denied_loader, greeting_component).unwrap(),
            Route::new("broken", "/broken", broken_loader, greeting_component).unwrap(),
        ])
        .unwrap()
    }

    fn ctx() -> SiteContext {
        SiteContext::from_config(&SiteConfig::default())
    }

    #[test]
    fn success_renders_the_component_inside_the_shell() {
        let document = respond(&table(), &ctx(), "/", None);
        assert_eq!(document.status, StatusCode::OK);
        assert!(document.html.contains(r#"<p class="greeting">hello</p>"#));
        assert!(document.html.contains("site-header"));
        assert!(document.html.contains("site-footer"));
    }

    #[test]
    fn unmatched_path_is_a_404_with_full_chrome() {
        let document = respond(&table(), &ctx(), "/nope", None);
        assert_eq!(document.status, StatusCode::NOT_FOUND);
        assert!(document.html.contains("does not exist"));
        assert!(document.html.contains("site-header"));
        assert!(document.html.contains("site-footer"));
    }

    #[test]
    fn loader_not_found_is_a_404_on_a_matched_route() {
        let document = respond(&table(), &ctx(), "/missing", None);
        assert_eq!(document.status, StatusCode::NOT_FOUND);
        assert!(document.html.contains("does not exist"));
    }

    #[test]
    fn loader_unauthorized_is_a_401() {
        let document = respond(&table(), &ctx(), "/private", None);
        assert_eq!(document.status, StatusCode::UNAUTHORIZED);
        assert!(document.html.contains("do not have access"));
    }

    #[test]
    fn unexpected_failure_is_a_500_with_no_leaked_detail() {
        let document = respond(&table(), &ctx(), "/broken", None);
        assert_eq!(document.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(document.html.contains("There was an error"));
        assert!(!document.html.contains("upstream data source unreachable"));
    }

    #[test]
    fn dev_mode_surfaces_the_failure_detail() {
        let mut config = SiteConfig::default();
        config.site.dev_mode = true;
        let ctx = SiteContext::from_config(&config);
        let document = respond(&table(), &ctx, "/broken", None);
        assert_eq!(document.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(document.html.contains("upstream data source unreachable"));
    }

    #[test]
    fn rendering_the_same_request_twice_is_byte_identical() {
        let table = table();
        let ctx = ctx();
        let first = respond(&table, &ctx, "/", None);
        let second = respond(&table, &ctx, "/", None);
        assert_eq!(first.html, second.html);
    }
}
