//! Route lookup and reverse construction.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Reject duplicate names and overlapping patterns at registration, so
//!   at most one route matches any location
//! - Look up the matching route for a location
//! - Build a location from a route name and parameters
//!
//! # Design Decisions
//! - Populated at startup, then shared read-only behind an `Arc`
//! - O(n) scan in registration order (route tables are small)
//! - First match wins
//! - Explicit `None` for no match rather than a silent default

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::routing::location::Location;
use crate::routing::matcher::PatternMatcher;
use crate::routing::pattern::PathPattern;
use crate::routing::types::{Params, RouteEntry, RouteError, RouteMatch, RouteResult, ViewId};

/// Matching rules shared by every route in a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Trailing slash is significant.
    pub strict: bool,
    /// Literal segments are case-sensitive.
    pub sensitive: bool,
}

#[derive(Debug)]
struct CompiledRoute {
    entry: Arc<RouteEntry>,
    matcher: PatternMatcher,
}

/// Ordered collection of routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    options: MatchOptions,
}

impl RouteTable {
    /// Create an empty table with default matching rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given matching rules.
    pub fn with_options(options: MatchOptions) -> Self {
        Self {
            routes: Vec::new(),
            options,
        }
    }

    /// Build a table from configured routes, registering them in order.
    pub fn from_config(routes: &[RouteConfig], options: MatchOptions) -> RouteResult<Self> {
        let mut table = Self::with_options(options);
        for route in routes {
            table.register(RouteEntry {
                path: route.path.clone(),
                name: route.name.clone(),
                view: ViewId::new(route.view.clone()),
            })?;
        }
        Ok(table)
    }

    /// Add a route at the end of the table.
    pub fn register(&mut self, entry: RouteEntry) -> RouteResult<()> {
        if self.routes.iter().any(|r| r.entry.name == entry.name) {
            return Err(RouteError::DuplicateName { name: entry.name });
        }

        let pattern = PathPattern::parse(&entry.path)?;
        let matcher = PatternMatcher::new(pattern, self.options);

        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| matcher.overlaps(&r.matcher))
        {
            return Err(RouteError::AmbiguousPattern {
                name: entry.name,
                path: entry.path,
                existing: existing.entry.name.clone(),
                existing_path: existing.entry.path.clone(),
            });
        }

        tracing::debug!(name = %entry.name, path = %entry.path, view = %entry.view, "Route registered");
        self.routes.push(CompiledRoute {
            entry: Arc::new(entry),
            matcher,
        });
        Ok(())
    }

    /// Find the first route matching a raw location string.
    pub fn match_location(&self, location: &str) -> Option<RouteMatch> {
        self.match_parsed(&Location::parse(location))
    }

    /// Find the first route matching an already parsed location.
    pub fn match_parsed(&self, location: &Location) -> Option<RouteMatch> {
        let segments = location.segments(self.options.strict)?;
        self.routes.iter().find_map(|route| {
            route.matcher.capture(&segments).map(|params| RouteMatch {
                entry: route.entry.clone(),
                params,
            })
        })
    }

    /// Build the path for a named route.
    pub fn reverse(&self, name: &str, params: &Params) -> RouteResult<String> {
        let route = self
            .routes
            .iter()
            .find(|r| r.entry.name == name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let unused: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|k| !route.matcher.pattern().param_names().any(|p| p == *k))
            .collect();
        if !unused.is_empty() {
            tracing::debug!(route = name, ?unused, "Ignoring parameters not in pattern");
        }

        route.matcher.build(name, params)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Arc<RouteEntry>> {
        self.routes
            .iter()
            .map(|r| &r.entry)
            .find(|e| e.name == name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteEntry>> {
        self.routes.iter().map(|r| &r.entry)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}
