//! Navigation metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): route updates by cause and
//!   resulting state (`resolved` / `unresolved`)
//! - `router_history_echoes_suppressed_total` (counter): history events
//!   dropped because they reported no transition

use crate::navigation::{NavigationCause, RouteState};

/// Record a route update.
pub fn record_navigation(cause: NavigationCause, state: RouteState) {
    ::metrics::counter!(
        "router_navigations_total",
        "cause" => cause.as_str(),
        "state" => state.as_str()
    )
    .increment(1);
}

/// Record a suppressed history event.
pub fn record_echo_suppressed() {
    ::metrics::counter!("router_history_echoes_suppressed_total").increment(1);
}
