//! Host history subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator write:
//!     navigate(location, Push | Replace)
//!     → History::push / History::replace
//!     → (optional) echo event if the host reports its own writes
//!
//! Host navigation (back / forward):
//!     user or Navigator::go
//!     → host moves its cursor
//!     → HistoryEvent { location, Pop } on the event feed
//!     → Navigator::process_history_events
//! ```
//!
//! # Design Decisions
//! - History is injected into the Navigator, never process-global
//! - The event feed is subscribed exactly once, at Navigator initialization
//! - Locations crossing this boundary are app-relative (base removed)

pub mod base;
pub mod memory;

use tokio::sync::mpsc;

pub use base::Base;
pub use memory::MemoryHistory;

/// What caused a history event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEventKind {
    /// The cursor moved (back, forward, go).
    Pop,
    /// Echo of a push the router made.
    Push,
    /// Echo of a replace the router made.
    Replace,
}

/// A location change reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    pub location: String,
    pub kind: HistoryEventKind,
}

/// Receiving end of the host's event feed.
pub type HistoryEvents = mpsc::UnboundedReceiver<HistoryEvent>;

/// The host's navigable history.
pub trait History {
    /// Current app-relative location.
    fn location(&self) -> String;

    /// Append a new entry, discarding any forward entries.
    fn push(&mut self, location: &str);

    /// Overwrite the current entry.
    fn replace(&mut self, location: &str);

    /// Move the cursor by `delta` entries. The result arrives as an event.
    fn go(&mut self, delta: isize);

    /// Subscribe to location changes.
    fn listen(&mut self) -> HistoryEvents;

    /// Whether the host reports the router's own writes as events.
    fn echoes_writes(&self) -> bool {
        false
    }
}
