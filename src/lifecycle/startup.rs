//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the route table
//! - Initialize the navigator from the host's current location
//!
//! # Design Decisions
//! - Fail fast: any misconfiguration is fatal
//! - Runtime "no match" is not a startup error; the navigator simply boots
//!   unresolved

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{load_config, ConfigError, RouterConfig};
use crate::history::History;
use crate::navigation::Navigator;
use crate::routing::{RouteError, RouteTable};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] RouteError),
}

/// Build the route table from `config` and bind it to `history`.
pub fn startup<H: History>(config: &RouterConfig, history: H) -> Result<Navigator<H>, StartupError> {
    let table = RouteTable::from_config(&config.routes, config.matching)?;

    tracing::info!(
        routes = table.len(),
        strict = config.matching.strict,
        sensitive = config.matching.sensitive,
        base = %config.history.base,
        "Route table ready"
    );

    let navigator = Navigator::from_history(Arc::new(table), history);

    tracing::info!(
        location = %navigator.current().raw_location,
        route = ?navigator.current().name(),
        state = navigator.current().state().as_str(),
        "Navigator started"
    );
    Ok(navigator)
}

/// Load `path` and start a navigator over `history`.
pub fn start_from_file<H: History>(path: &Path, history: H) -> Result<Navigator<H>, StartupError> {
    let config = load_config(path)?;
    startup(&config, history)
}
