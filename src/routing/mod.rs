//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → table.rs (walk route tree)
//!     → pattern.rs (segment-wise matching, param capture)
//!     → Return: ResolvedPage (root→leaf chain + params) or None
//!
//! Route Compilation (at startup):
//!     Vec<Route>
//!     → Parse patterns
//!     → Reject duplicate siblings / duplicate param names
//!     → Stable-sort siblings most-specific-first
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - Literal segments beat params beat catch-alls; exact ties fall back
//!   to registration order

pub mod pattern;
pub mod table;

pub use pattern::PathPattern;
pub use table::{LoadError, PageRequest, ResolvedPage, Route, RouteTable, RoutingError};
