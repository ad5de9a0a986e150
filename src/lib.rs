//! Client-side navigation router for single-page applications.
//!
//! Maps locations to opaque view identifiers and keeps the route state in
//! step with the host's back/forward history.
//!
//! ```text
//!   view calls "go to X"          host back / forward
//!          │                              │
//!          ▼                              ▼
//!   ┌──────────────┐  push/replace  ┌───────────┐
//!   │  Navigator   │───────────────▶│  History  │
//!   │ CurrentRoute │◀───────────────│  (host)   │
//!   └──────┬───────┘  events (Pop)  └───────────┘
//!          │ lookup / reverse
//!          ▼
//!   ┌──────────────┐
//!   │  RouteTable  │  (read-only after startup)
//!   └──────────────┘
//! ```

pub mod config;
pub mod history;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use history::{History, MemoryHistory};
pub use navigation::{CurrentRoute, NavigationMode, Navigator};
pub use routing::{RouteEntry, RouteError, RouteTable, ViewId};
