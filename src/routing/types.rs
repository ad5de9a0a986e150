//! Route entry types and error definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Captured path parameters, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// Opaque view identifier.
///
/// The router never interprets it; the host's view registry decides what to
/// render for a given id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named association between a path pattern and a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Anchored path pattern, e.g. `/rooms/:id`.
    pub path: String,
    /// Unique name used for reverse lookup.
    pub name: String,
    /// View to activate when this entry matches.
    pub view: ViewId,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }
}

/// Result of a successful table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: Arc<RouteEntry>,
    pub params: Params,
}

/// Errors raised while building a route table or reversing a route.
///
/// All of these are configuration faults. A location that matches nothing is
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Another entry already uses this name.
    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },

    /// Some location would match both the new pattern and an existing one.
    #[error("route '{name}' ({path}) is ambiguous with route '{existing}' ({existing_path})")]
    AmbiguousPattern {
        name: String,
        path: String,
        existing: String,
        existing_path: String,
    },

    /// The pattern string could not be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// No entry with this name.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// A parameter segment has no supplied value.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },
}

/// Result type for route table operations.
pub type RouteResult<T> = Result<T, RouteError>;
