//! Lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C (or a test calling trigger)
//!     → shutdown.rs broadcast
//!     → server drains in-flight requests and stops accepting
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
