//! Site content: per-route loaders, components, and metadata functions.
//!
//! # Data Flow
//! ```text
//! routes() (startup)
//!     → Route registrations (pattern, loader, component, metadata, sheets)
//!     → RouteTable::build
//!
//! Per request, the pipeline calls back into the functions defined here.
//! ```
//!
//! Everything in this module is content; the pipeline does not know or
//! care what the pages say.

pub mod about;
pub mod home;

use crate::config::schema::StylesheetLink;
use crate::routing::table::{Route, RoutingError};

/// The site's route registrations, built once at startup.
pub fn routes() -> Result<Vec<Route>, RoutingError> {
    Ok(vec![
        Route::new("home", "/", home::loader, home::component)?.with_metadata(home::metadata),
        Route::new("about", "/about", about::loader, about::component)?
            .with_metadata(about::metadata)
            .with_stylesheet(StylesheetLink::new("/styles/about.css"))
            .with_child(Route::new(
                "about-index",
                "",
                about::index_loader,
                about::index_component,
            )?),
    ])
}
