//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build RouteTable → Initialize Navigator
//!
//! Shutdown:
//!     Drop the Navigator → its history event receiver closes → the host
//!     sees the listener detached
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then table, then navigator
//! - One navigator per application, owned by the host, never replaced

pub mod startup;

pub use startup::{start_from_file, startup, StartupError};
