//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and navigation produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters via the `metrics` facade)
//!
//! Consumers:
//!     → Log output (stdout, pretty or JSON)
//!     → Whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a subscriber or recorder is the
//!   host's call (the CLI installs a subscriber)
//! - Metrics are cheap (no recorder installed means no-op)

pub mod logging;
pub mod metrics;
