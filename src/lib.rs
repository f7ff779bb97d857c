//! Wellness DAO marketing site.
//!
//! A server-rendered site built with Tokio and Axum. The structured core
//! is the page pipeline:
//!
//! ```text
//! request path
//!     → routing   (route table lookup, param capture)
//!     → pipeline  (loaders top-down, components bottom-up)
//!     → render    (metadata, shell, chrome; failures via the presenter)
//!     → HTML document + status
//! ```
//!
//! `pages/` holds the site content; everything else is content-agnostic.

// Core subsystems
pub mod config;
pub mod http;
pub mod pipeline;
pub mod render;
pub mod routing;

// Site content
pub mod pages;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pipeline::{RenderedDocument, SiteContext};
pub use routing::RouteTable;
