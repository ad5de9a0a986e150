//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use spa_router::history::{History, HistoryEvent, HistoryEventKind, HistoryEvents};
use spa_router::navigation::{NavigationCause, Navigator};
use spa_router::routing::{RouteEntry, RouteTable};
use tokio::sync::mpsc;

/// The two-route table of the chat client: `/` → Login, `/rooms` → Rooms.
pub fn login_rooms_table() -> Arc<RouteTable> {
    let mut table = RouteTable::new();
    table.register(RouteEntry::new("/", "Login", "LoginView")).unwrap();
    table.register(RouteEntry::new("/rooms", "Rooms", "RoomsView")).unwrap();
    Arc::new(table)
}

/// A larger table with parameter routes.
pub fn chat_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.register(RouteEntry::new("/", "Login", "LoginView")).unwrap();
    table.register(RouteEntry::new("/rooms", "Rooms", "RoomsView")).unwrap();
    table.register(RouteEntry::new("/rooms/:room", "Room", "RoomView")).unwrap();
    table
        .register(RouteEntry::new("/rooms/:room/members/:member", "Member", "MemberView"))
        .unwrap();
    table.register(RouteEntry::new("/users/:user", "User", "UserView")).unwrap();
    table
}

/// One notification as seen by a listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub from: String,
    pub to: String,
    pub route: Option<String>,
    pub cause: NavigationCause,
}

/// Subscribe a listener that records every change.
pub fn record<H: History>(nav: &Navigator<H>) -> Rc<RefCell<Vec<Seen>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    nav.subscribe(move |change| {
        sink.borrow_mut().push(Seen {
            from: change.from.raw_location.clone(),
            to: change.to.raw_location.clone(),
            route: change.to.name().map(str::to_string),
            cause: change.cause,
        });
    });
    log
}

#[derive(Debug, Default)]
pub struct SpyState {
    pub location: String,
    pub writes: Vec<String>,
    pub sender: Option<mpsc::UnboundedSender<HistoryEvent>>,
    pub listen_calls: usize,
}

/// A history that only records what the navigator asks of it.
///
/// Host events are injected by hand with `fire`.
#[derive(Debug, Clone, Default)]
pub struct SpyHistory {
    pub state: Rc<RefCell<SpyState>>,
}

impl SpyHistory {
    pub fn at(location: &str) -> Self {
        let spy = Self::default();
        spy.state.borrow_mut().location = location.to_string();
        spy
    }

    pub fn writes(&self) -> Vec<String> {
        self.state.borrow().writes.clone()
    }

    pub fn listen_calls(&self) -> usize {
        self.state.borrow().listen_calls
    }

    /// Simulate the host moving to `location` on its own.
    pub fn fire(&self, location: &str) {
        let mut state = self.state.borrow_mut();
        state.location = location.to_string();
        if let Some(tx) = &state.sender {
            let _ = tx.send(HistoryEvent {
                location: location.to_string(),
                kind: HistoryEventKind::Pop,
            });
        }
    }
}

impl History for SpyHistory {
    fn location(&self) -> String {
        self.state.borrow().location.clone()
    }

    fn push(&mut self, location: &str) {
        let mut state = self.state.borrow_mut();
        state.writes.push(format!("push {}", location));
        state.location = location.to_string();
    }

    fn replace(&mut self, location: &str) {
        let mut state = self.state.borrow_mut();
        state.writes.push(format!("replace {}", location));
        state.location = location.to_string();
    }

    fn go(&mut self, delta: isize) {
        self.state.borrow_mut().writes.push(format!("go {}", delta));
    }

    fn listen(&mut self) -> HistoryEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.borrow_mut();
        state.sender = Some(tx);
        state.listen_calls += 1;
        rx
    }
}
