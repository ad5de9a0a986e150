//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     RouteEntry (path, name, view)
//!     → pattern.rs (parse segments)
//!     → table.rs (duplicate + ambiguity checks)
//!     → Freeze as Arc<RouteTable>
//!
//! Lookup:
//!     raw location
//!     → location.rs (path / query / hash, decoded segments)
//!     → matcher.rs (evaluate each pattern in order)
//!     → Return: RouteMatch or None
//!
//! Reverse:
//!     name + params → pattern.rs (encode segments) → path
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, read-only afterwards
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod location;
pub mod matcher;
pub mod pattern;
pub mod table;
pub mod types;

pub use location::Location;
pub use table::{MatchOptions, RouteTable};
pub use types::{Params, RouteEntry, RouteError, RouteMatch, RouteResult, ViewId};
