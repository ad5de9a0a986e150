//! Current-route state and navigation vocabulary.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::routing::{Location, Params, RouteEntry, RouteTable, ViewId};

/// How a navigation writes to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Append a new history entry.
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// Why the current route changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCause {
    Initial,
    Push,
    Replace,
    External,
}

impl NavigationCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationCause::Initial => "initial",
            NavigationCause::Push => "push",
            NavigationCause::Replace => "replace",
            NavigationCause::External => "external",
        }
    }
}

impl From<NavigationMode> for NavigationCause {
    fn from(mode: NavigationMode) -> Self {
        match mode {
            NavigationMode::Push => NavigationCause::Push,
            NavigationMode::Replace => NavigationCause::Replace,
        }
    }
}

/// Result of a `navigate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// State updated, history written, listeners notified.
    Navigated,
    /// Target equals the current location; nothing happened.
    Duplicated,
}

/// Whether the current location matched a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteState {
    Resolved,
    Unresolved,
}

impl RouteState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteState::Resolved => "resolved",
            RouteState::Unresolved => "unresolved",
        }
    }
}

/// The route the application is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentRoute {
    /// Matched entry, or `None` in the not-found state.
    pub matched: Option<Arc<RouteEntry>>,
    /// Captured path parameters.
    pub params: Params,
    /// Location string exactly as last resolved.
    pub raw_location: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
}

impl CurrentRoute {
    /// Resolve a raw location against a table. Never fails.
    pub fn resolve(table: &RouteTable, raw_location: &str) -> Self {
        let location = Location::parse(raw_location);
        let (matched, params) = match table.match_parsed(&location) {
            Some(m) => (Some(m.entry), m.params),
            None => (None, Params::new()),
        };
        Self {
            matched,
            params,
            raw_location: raw_location.to_string(),
            path: location.path,
            query: location.query,
            hash: location.hash,
        }
    }

    pub fn state(&self) -> RouteState {
        if self.matched.is_some() {
            RouteState::Resolved
        } else {
            RouteState::Unresolved
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.matched.is_some()
    }

    /// View to render, if any route matched.
    pub fn view(&self) -> Option<&ViewId> {
        self.matched.as_ref().map(|e| &e.view)
    }

    /// Name of the matched route.
    pub fn name(&self) -> Option<&str> {
        self.matched.as_ref().map(|e| e.name.as_str())
    }
}

/// Passed to listeners after every update.
#[derive(Debug, Clone, Copy)]
pub struct RouteChange<'a> {
    pub from: &'a CurrentRoute,
    pub to: &'a CurrentRoute,
    pub cause: NavigationCause,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        let mut table = RouteTable::new();
        table.register(RouteEntry::new("/", "Login", "LoginView")).unwrap();
        table.register(RouteEntry::new("/rooms/:id", "Room", "RoomView")).unwrap();
        table
    }

    #[test]
    fn test_resolved_route() {
        let route = CurrentRoute::resolve(&table(), "/rooms/9?tab=files#last");
        assert_eq!(route.state(), RouteState::Resolved);
        assert_eq!(route.name(), Some("Room"));
        assert_eq!(route.view().map(ViewId::as_str), Some("RoomView"));
        assert_eq!(route.params.get("id").map(String::as_str), Some("9"));
        assert_eq!(route.raw_location, "/rooms/9?tab=files#last");
        assert_eq!(route.path, "/rooms/9");
        assert_eq!(route.query.get("tab").map(String::as_str), Some("files"));
        assert_eq!(route.hash.as_deref(), Some("last"));
    }

    #[test]
    fn test_unresolved_route() {
        let route = CurrentRoute::resolve(&table(), "/nowhere");
        assert_eq!(route.state(), RouteState::Unresolved);
        assert!(!route.is_resolved());
        assert!(route.view().is_none());
        assert!(route.params.is_empty());
        assert_eq!(route.raw_location, "/nowhere");
    }
}
