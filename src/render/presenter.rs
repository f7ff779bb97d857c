//! Error and not-found presentation.
//!
//! # Responsibilities
//! - Classify pipeline failures into a closed set of outcomes
//! - Produce the status-specific fragment and metadata for each
//!
//! # Design Decisions
//! - `Failure` is a closed enum matched exhaustively; a new outcome is a
//!   compile error at every presentation site, never a silent fallthrough
//! - Internal failure detail is rendered only in dev mode

use axum::http::StatusCode;
use maud::{html, Markup};

use crate::render::metadata::PageMetadata;
use crate::routing::table::{LoadError, RenderError};

/// A non-success request outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No route matched, or a loader signalled a missing resource.
    NotFound,

    /// A loader denied access.
    Unauthorized,

    /// An unexpected loader or renderer failure. The payload is logged
    /// server-side and shown to users only in dev mode.
    Unexpected(String),
}

impl Failure {
    pub fn status(&self) -> StatusCode {
        match self {
            Failure::NotFound => StatusCode::NOT_FOUND,
            Failure::Unauthorized => StatusCode::UNAUTHORIZED,
            Failure::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LoadError> for Failure {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound => Failure::NotFound,
            LoadError::Unauthorized => Failure::Unauthorized,
            LoadError::Unexpected(detail) => Failure::Unexpected(detail),
        }
    }
}

impl From<RenderError> for Failure {
    fn from(err: RenderError) -> Self {
        Failure::Unexpected(err.to_string())
    }
}

/// Render the user-facing fragment and metadata for a failure.
///
/// The result still flows through the shell composer, so failure pages
/// carry the same chrome as every other page.
pub fn present(failure: &Failure, dev_mode: bool) -> (PageMetadata, Markup) {
    match failure {
        Failure::NotFound => caught(
            StatusCode::NOT_FOUND,
            "Oops! Looks like you tried to visit a page that does not exist.",
        ),
        Failure::Unauthorized => caught(
            StatusCode::UNAUTHORIZED,
            "Oops! Looks like you tried to visit a page that you do not have access to.",
        ),
        Failure::Unexpected(detail) => {
            let fragment = html! {
                div {
                    h1 { "There was an error" }
                    @if dev_mode {
                        p { (detail) }
                        hr;
                        p { "This detail is shown because dev mode is on." }
                    } @else {
                        p { "Sorry about that. Please try again later." }
                    }
                }
            };
            (PageMetadata::new("Error!"), fragment)
        }
    }
}

/// Status page for a recognized, intentional non-success outcome.
fn caught(status: StatusCode, message: &str) -> (PageMetadata, Markup) {
    let reason = status.canonical_reason().unwrap_or("Error");
    let fragment = html! {
        h1 { (status.as_u16()) ": " (reason) }
        p { (message) }
    };
    (
        PageMetadata::new(format!("{} {}", status.as_u16(), reason)),
        fragment,
    )
}
