//! Document metadata resolution.

use serde_json::Value;

use crate::routing::table::Route;

/// Title and description for a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Resolve metadata for a matched chain.
///
/// The leaf-most route with a metadata fn wins, mirroring how a child
/// page's title overrides its layout's. Routes without one fall back to
/// the site-wide default.
pub fn resolve(chain: &[&Route], payloads: &[Value], default: &PageMetadata) -> PageMetadata {
    chain
        .iter()
        .zip(payloads)
        .rev()
        .find_map(|(route, payload)| route.metadata.map(|f| f(payload)))
        .unwrap_or_else(|| default.clone())
}
