//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::MatchOptions;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Matching rules applied to every route.
    pub matching: MatchOptions,

    /// Host history settings.
    pub history: HistoryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path pattern (e.g., "/rooms/:id").
    pub path: String,

    /// Unique route name for reverse lookup.
    pub name: String,

    /// View identifier handed to the view registry.
    pub view: String,
}

/// Host history configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Base path the application is served under (e.g., "/app").
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
