//! In-memory history.
//!
//! # Responsibilities
//! - Keep an entry stack and a cursor, like a browser session history
//! - Report cursor moves as `Pop` events
//! - Optionally echo the router's own writes as `Push`/`Replace` events
//! - Count writes for inspection
//!
//! # Design Decisions
//! - Cloneable handle over shared state so the host keeps a copy after
//!   handing one to the Navigator
//! - Single-threaded (`Rc<RefCell<_>>`), matching the UI event loop
//! - `go` clamps to the stack and emits nothing when the cursor did not move

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::mpsc;

use crate::history::{Base, History, HistoryEvent, HistoryEventKind, HistoryEvents};

#[derive(Debug)]
struct State {
    /// Full hrefs, base included.
    entries: Vec<String>,
    index: usize,
    base: Base,
    echo_writes: bool,
    listener: Option<mpsc::UnboundedSender<HistoryEvent>>,
    pushes: usize,
    replaces: usize,
}

impl State {
    fn current_location(&self) -> String {
        self.base.strip(&self.entries[self.index])
    }

    fn emit(&mut self, kind: HistoryEventKind) {
        let event = HistoryEvent {
            location: self.current_location(),
            kind,
        };
        let delivered = match &self.listener {
            Some(tx) => tx.send(event).is_ok(),
            None => return,
        };
        if !delivered {
            tracing::trace!("History listener dropped, detaching");
            self.listener = None;
        }
    }
}

/// Session history held in memory.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    state: Rc<RefCell<State>>,
}

impl MemoryHistory {
    /// Create a history with a single entry at `initial`.
    pub fn new(initial: &str) -> Self {
        Self::with_base("/", initial)
    }

    /// Create a history whose hrefs live under `base`.
    pub fn with_base(base: &str, initial: &str) -> Self {
        let base = Base::new(base);
        let state = State {
            entries: vec![base.href(initial)],
            index: 0,
            base,
            echo_writes: false,
            listener: None,
            pushes: 0,
            replaces: 0,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Report pushes and replaces as events too.
    pub fn with_write_echo(self) -> Self {
        self.state.borrow_mut().echo_writes = true;
        self
    }

    /// Move one entry back. Returns false at the start of the stack.
    pub fn back(&self) -> bool {
        self.move_by(-1)
    }

    /// Move one entry forward. Returns false at the end of the stack.
    pub fn forward(&self) -> bool {
        self.move_by(1)
    }

    fn move_by(&self, delta: isize) -> bool {
        let mut state = self.state.borrow_mut();
        let last = state.entries.len() as isize - 1;
        let target = (state.index as isize).saturating_add(delta).clamp(0, last) as usize;
        if target == state.index {
            return false;
        }
        state.index = target;
        state.emit(HistoryEventKind::Pop);
        true
    }

    /// App-relative locations of every entry.
    pub fn entries(&self) -> Vec<String> {
        let state = self.state.borrow();
        state.entries.iter().map(|e| state.base.strip(e)).collect()
    }

    /// Cursor position within `entries()`.
    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    /// Full href of the current entry, base included.
    pub fn href(&self) -> String {
        let state = self.state.borrow();
        state.entries[state.index].clone()
    }

    pub fn push_count(&self) -> usize {
        self.state.borrow().pushes
    }

    pub fn replace_count(&self) -> usize {
        self.state.borrow().replaces
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.state.borrow().current_location()
    }

    fn push(&mut self, location: &str) {
        let mut state = self.state.borrow_mut();
        let href = state.base.href(location);
        let next = state.index + 1;
        state.entries.truncate(next);
        state.entries.push(href);
        state.index = next;
        state.pushes += 1;
        if state.echo_writes {
            state.emit(HistoryEventKind::Push);
        }
    }

    fn replace(&mut self, location: &str) {
        let mut state = self.state.borrow_mut();
        let href = state.base.href(location);
        let index = state.index;
        state.entries[index] = href;
        state.replaces += 1;
        if state.echo_writes {
            state.emit(HistoryEventKind::Replace);
        }
    }

    fn go(&mut self, delta: isize) {
        self.move_by(delta);
    }

    fn listen(&mut self) -> HistoryEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state.borrow_mut().listener = Some(tx);
        rx
    }

    fn echoes_writes(&self) -> bool {
        self.state.borrow().echo_writes
    }
}
