//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Loader payloads + matched chain
//!     → metadata.rs (resolve title/description, leaf wins)
//!     → shell.rs (head, chrome, fragment, footer → full document)
//!     → chrome.rs (header/footer markup from explicit chrome config)
//!
//! On failure:
//!     Failure (presenter.rs)
//!     → status-specific fragment + metadata
//!     → same shell.rs composition as success pages
//! ```
//!
//! # Design Decisions
//! - Chrome is passed in explicitly; no module-level template state
//! - The shell is identical for success and failure documents
//! - Metadata resolution never fails; missing or broken metadata falls
//!   back to the site-wide default

pub mod chrome;
pub mod metadata;
pub mod presenter;
pub mod shell;

pub use metadata::PageMetadata;
pub use presenter::Failure;
