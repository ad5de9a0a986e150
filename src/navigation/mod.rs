//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Router-initiated (view calls "go to X"):
//!     Navigator::navigate(location, Push | Replace)
//!     → RouteTable lookup → CurrentRoute replaced
//!     → History::push / History::replace
//!     → listeners notified (synchronously)
//!
//! Host-initiated (back / forward):
//!     HistoryEvent on the event feed
//!     → Navigator::process_history_events
//!     → echo? drop : on_external_change
//!     → RouteTable lookup → CurrentRoute replaced
//!     → listeners notified (history untouched)
//! ```
//!
//! # State Machine
//! ```text
//!     Resolved ←→ Unresolved
//! ```
//! Initial state comes from the boot location. Transitions happen only through
//! `navigate` and `on_external_change`.

pub mod listeners;
pub mod navigator;
pub mod route;

pub use listeners::Subscription;
pub use navigator::Navigator;
pub use route::{
    CurrentRoute, NavigationCause, NavigationMode, NavigationOutcome, RouteChange, RouteState,
};
