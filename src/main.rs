use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use spa_router::config::load_config;
use spa_router::lifecycle::startup;
use spa_router::navigation::{CurrentRoute, NavigationMode, NavigationOutcome};
use spa_router::observability::logging::init_logging;
use spa_router::routing::{Params, RouteTable};
use spa_router::MemoryHistory;

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Inspect and exercise a single-page app route table", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "router.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured routes
    Routes,
    /// Resolve a location to a route
    Resolve { location: String },
    /// Build a location from a route name
    Reverse {
        name: String,
        /// Parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Replay navigation steps against an in-memory history.
    /// Steps: a location to push, `replace:<location>`, `back`, `forward`
    Replay {
        #[arg(long, default_value = "/")]
        initial: String,
        steps: Vec<String>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_logging(&config.observability)?;

    match cli.command {
        Commands::Routes => {
            let table = RouteTable::from_config(&config.routes, config.matching)?;
            let entries: Vec<_> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Resolve { location } => {
            let table = RouteTable::from_config(&config.routes, config.matching)?;
            let route = CurrentRoute::resolve(&table, &location);
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        Commands::Reverse { name, params } => {
            let table = RouteTable::from_config(&config.routes, config.matching)?;
            let params: Params = params.into_iter().collect();
            println!("{}", table.reverse(&name, &params)?);
        }
        Commands::Replay { initial, steps } => {
            let history = MemoryHistory::with_base(&config.history.base, &initial);
            let mut navigator = startup(&config, history.clone())?;

            let _subscription = navigator.subscribe(|change| {
                let line = json!({
                    "cause": change.cause,
                    "from": change.from.raw_location,
                    "to": change.to.raw_location,
                    "route": change.to.name(),
                    "view": change.to.view(),
                    "params": change.to.params,
                });
                println!("{}", line);
            });

            for step in &steps {
                match step.as_str() {
                    "back" => {
                        navigator.back();
                    }
                    "forward" => {
                        navigator.forward();
                    }
                    other => {
                        let (location, mode) = match other.strip_prefix("replace:") {
                            Some(location) => (location, NavigationMode::Replace),
                            None => (other, NavigationMode::Push),
                        };
                        if navigator.navigate(location, mode) == NavigationOutcome::Duplicated {
                            tracing::info!(location, "Already at location, step skipped");
                        }
                    }
                }
            }

            let summary = json!({
                "entries": history.entries(),
                "index": history.index(),
                "href": history.href(),
                "current": navigator.current(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
