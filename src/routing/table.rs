//! Route table: registration, compilation, and lookup.
//!
//! # Responsibilities
//! - Hold the route tree (loader, component, metadata fn, stylesheets)
//! - Validate registrations at build time
//! - Resolve a request path to a root→leaf route chain with params
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Siblings are stable-sorted most-specific-first at build time, so
//!   registration order is the tie-break when specificities are equal
//! - Explicit None on no match rather than a silent default route
//! - A parent whose children cannot consume the remaining segments is
//!   not a match; resolution falls through to the next candidate

use std::collections::{BTreeMap, HashSet};

use maud::Markup;
use serde_json::Value;
use thiserror::Error;

use crate::config::schema::StylesheetLink;
use crate::render::metadata::PageMetadata;
use crate::routing::pattern::{split_path, PathPattern, PatternError};

/// Per-request input handed to loaders.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Request path as received (no query string).
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Params captured by the matched chain.
    pub params: BTreeMap<String, String>,
}

/// Failure signalled by a loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The route matched but the resource it describes does not exist.
    #[error("resource not found")]
    NotFound,

    /// The loader denied access.
    #[error("access denied")]
    Unauthorized,

    /// Anything else. Logged server-side, never shown to users unless
    /// dev mode is on.
    #[error("{0}")]
    Unexpected(String),
}

/// Failure raised while rendering a component.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The loader payload did not match the shape the component expects.
    #[error("component data mismatch: {0}")]
    Data(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Produces the data payload for a route. Synchronous pure read.
pub type Loader = fn(&PageRequest) -> Result<Value, LoadError>;

/// Renders a payload (and the matched child's fragment, if any) into
/// markup. Pure function of its inputs.
pub type Component = fn(&Value, Option<Markup>) -> Result<Markup, RenderError>;

/// Derives document metadata from the loader payload.
pub type MetadataFn = fn(&Value) -> PageMetadata;

/// Errors raised while building the route table.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("duplicate route pattern {pattern:?} under {parent:?}")]
    DuplicatePattern { parent: String, pattern: String },

    #[error("param {name:?} captured more than once along route {route:?}")]
    DuplicateParam { route: String, name: String },
}

/// A registered route node.
///
/// Child patterns are relative to the parent; an empty pattern marks the
/// index child rendered into the parent's outlet when the parent consumes
/// the whole path.
pub struct Route {
    pub name: &'static str,
    pattern: PathPattern,
    pub loader: Loader,
    pub component: Component,
    pub metadata: Option<MetadataFn>,
    pub stylesheets: Vec<StylesheetLink>,
    children: Vec<Route>,
}

impl Route {
    pub fn new(
        name: &'static str,
        pattern: &str,
        loader: Loader,
        component: Component,
    ) -> Result<Self, RoutingError> {
        Ok(Self {
            name,
            pattern: PathPattern::parse(pattern)?,
            loader,
            component,
            metadata: None,
            stylesheets: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn with_metadata(mut self, metadata: MetadataFn) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: StylesheetLink) -> Self {
        self.stylesheets.push(stylesheet);
        self
    }

    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("pattern", &self.pattern.raw())
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// A resolved request: the matched root→leaf chain plus captured params.
#[derive(Debug)]
pub struct ResolvedPage<'a> {
    pub chain: Vec<&'a Route>,
    pub params: BTreeMap<String, String>,
}

/// The compiled, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compile the registration list into a table.
    ///
    /// Rejects identical sibling patterns and param names captured twice
    /// along one chain, then orders every sibling list most-specific-first
    /// (stable, so registration order decides equal specificities).
    pub fn build(mut routes: Vec<Route>) -> Result<Self, RoutingError> {
        Self::compile_level("", &mut routes, &HashSet::new())?;
        Ok(Self { routes })
    }

    fn compile_level(
        parent: &str,
        routes: &mut [Route],
        inherited_params: &HashSet<String>,
    ) -> Result<(), RoutingError> {
        let mut seen = HashSet::new();
        for route in routes.iter() {
            if !seen.insert(route.pattern.raw().to_string()) {
                return Err(RoutingError::DuplicatePattern {
                    parent: parent.to_string(),
                    pattern: route.pattern.raw().to_string(),
                });
            }
        }

        for route in routes.iter_mut() {
            let mut params = inherited_params.clone();
            for name in route.pattern.param_names() {
                if !params.insert(name.to_string()) {
                    return Err(RoutingError::DuplicateParam {
                        route: route.name.to_string(),
                        name: name.to_string(),
                    });
                }
            }
            Self::compile_level(route.pattern.raw(), &mut route.children, &params)?;
        }

        routes.sort_by_key(|r| r.pattern.specificity());
        Ok(())
    }

    /// Resolve a request path to a route chain.
    pub fn resolve(&self, path: &str) -> Option<ResolvedPage<'_>> {
        let segments = split_path(path);
        let empty = BTreeMap::new();
        for route in &self.routes {
            if let Some((chain, params)) = Self::descend(route, &segments, &empty) {
                return Some(ResolvedPage { chain, params });
            }
        }
        None
    }

    fn descend<'a>(
        route: &'a Route,
        segments: &[&str],
        params: &BTreeMap<String, String>,
    ) -> Option<(Vec<&'a Route>, BTreeMap<String, String>)> {
        let mut branch_params = params.clone();
        let rest = route.pattern.match_prefix(segments, &mut branch_params)?;

        if rest.is_empty() {
            // Whole path consumed: the index child (if any) fills the outlet.
            if let Some(index) = route.children.iter().find(|c| c.pattern.is_index()) {
                return Some((vec![route, index], branch_params));
            }
            return Some((vec![route], branch_params));
        }

        for child in route.children.iter().filter(|c| !c.pattern.is_index()) {
            if let Some((mut chain, found)) = Self::descend(child, rest, &branch_params) {
                chain.insert(0, route);
                return Some((chain, found));
            }
        }
        None
    }
}
