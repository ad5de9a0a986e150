//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route names, views and pattern syntax
//! - Detect duplicate names and ambiguous routes
//! - Validate history base and log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::pattern::PathPattern;
use crate::routing::{RouteEntry, RouteError, RouteTable, ViewId};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("route '{route}' has an empty view")]
    EmptyView { route: String },

    #[error("route '{route}': {source}")]
    InvalidRoute { route: String, source: RouteError },

    #[error("route name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("history base '{0}' must start with '/'")]
    InvalidBase(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a parsed config.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut scratch = RouteTable::with_options(config.matching);

    for (index, route) in config.routes.iter().enumerate() {
        let mut usable = true;

        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
            usable = false;
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
            usable = false;
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView {
                route: route.name.clone(),
            });
            usable = false;
        }

        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::InvalidRoute {
                route: route.name.clone(),
                source,
            });
            usable = false;
        }

        // Ambiguity depends on registration order, so replay it
        if usable {
            let entry = RouteEntry {
                path: route.path.clone(),
                name: route.name.clone(),
                view: ViewId::new(route.view.clone()),
            };
            if let Err(source) = scratch.register(entry) {
                errors.push(ValidationError::InvalidRoute {
                    route: route.name.clone(),
                    source,
                });
            }
        }
    }

    if !config.history.base.is_empty() && !config.history.base.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.history.base.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
