//! The navigator: route state bound to a host history.
//!
//! # Responsibilities
//! - Resolve the boot location into the initial route
//! - Apply router-initiated navigations (push / replace)
//! - Apply host-initiated changes (back / forward) without writing history
//! - Suppress echoes of the router's own writes
//! - Notify listeners synchronously after every update
//!
//! # Design Decisions
//! - Every transition re-resolves from scratch; no diffing
//! - A location equal to the current one is never a transition
//! - Listeners get shared references only; the navigator is the sole writer

use std::collections::VecDeque;
use std::sync::Arc;

use crate::history::{History, HistoryEventKind, HistoryEvents};
use crate::navigation::listeners::{Listeners, Subscription};
use crate::navigation::route::{
    CurrentRoute, NavigationCause, NavigationMode, NavigationOutcome, RouteChange,
};
use crate::observability::metrics;
use crate::routing::{Params, RouteResult, RouteTable};

/// Route state synchronized with a host history.
#[derive(Debug)]
pub struct Navigator<H: History> {
    table: Arc<RouteTable>,
    history: H,
    events: HistoryEvents,
    current: CurrentRoute,
    listeners: Listeners,
    /// Locations written to a history that echoes writes, oldest first,
    /// as the history reports them.
    pending_echoes: VecDeque<String>,
}

impl<H: History> Navigator<H> {
    /// Bind a table to a history and resolve the boot location.
    ///
    /// History is not written; the host is assumed to already be at
    /// `initial_location`. A location that matches nothing yields the
    /// unresolved state.
    pub fn initialize(table: Arc<RouteTable>, mut history: H, initial_location: &str) -> Self {
        let events = history.listen();
        let current = CurrentRoute::resolve(&table, initial_location);

        tracing::debug!(
            location = %current.raw_location,
            route = ?current.name(),
            state = current.state().as_str(),
            "Navigator initialized"
        );
        metrics::record_navigation(NavigationCause::Initial, current.state());

        Self {
            table,
            history,
            events,
            current,
            listeners: Listeners::new(),
            pending_echoes: VecDeque::new(),
        }
    }

    /// Initialize from the history's current location.
    pub fn from_history(table: Arc<RouteTable>, history: H) -> Self {
        let initial = history.location();
        Self::initialize(table, history, &initial)
    }

    pub fn current(&self) -> &CurrentRoute {
        &self.current
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Register a listener called after every route update.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RouteChange<'_>) + 'static,
    {
        self.listeners.add(listener)
    }

    /// Resolve a location without navigating.
    pub fn resolve(&self, location: &str) -> CurrentRoute {
        CurrentRoute::resolve(&self.table, location)
    }

    /// Navigate to `location`, writing it to history.
    pub fn navigate(&mut self, location: &str, mode: NavigationMode) -> NavigationOutcome {
        if location == self.current.raw_location {
            tracing::debug!(location, ?mode, "Duplicate navigation ignored");
            return NavigationOutcome::Duplicated;
        }

        let next = CurrentRoute::resolve(&self.table, location);
        let previous = std::mem::replace(&mut self.current, next);

        match mode {
            NavigationMode::Push => self.history.push(location),
            NavigationMode::Replace => self.history.replace(location),
        }
        if self.history.echoes_writes() {
            self.pending_echoes.push_back(self.history.location());
        }

        self.announce(previous, mode.into());
        NavigationOutcome::Navigated
    }

    /// Navigate to a named route.
    pub fn navigate_named(
        &mut self,
        name: &str,
        params: &Params,
        mode: NavigationMode,
    ) -> RouteResult<NavigationOutcome> {
        let location = self.table.reverse(name, params)?;
        Ok(self.navigate(&location, mode))
    }

    /// Apply a change the host has already made (back / forward).
    ///
    /// Never writes to history. Returns false when `location` is already
    /// current and nothing changed.
    pub fn on_external_change(&mut self, location: &str) -> bool {
        if location == self.current.raw_location {
            tracing::trace!(location, "Location already current, ignored");
            return false;
        }

        let next = CurrentRoute::resolve(&self.table, location);
        let previous = std::mem::replace(&mut self.current, next);
        self.announce(previous, NavigationCause::External);
        true
    }

    /// Drain queued history events in delivery order.
    ///
    /// Returns the number of route transitions applied.
    pub fn process_history_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            if self.pending_echoes.front() == Some(&event.location) {
                self.pending_echoes.pop_front();
                tracing::trace!(location = %event.location, kind = ?event.kind, "Write echo suppressed");
                metrics::record_echo_suppressed();
                continue;
            }
            if event.kind != HistoryEventKind::Pop {
                tracing::trace!(location = %event.location, kind = ?event.kind, "Untracked write echo ignored");
                metrics::record_echo_suppressed();
                continue;
            }

            tracing::debug!(location = %event.location, "History moved");
            if self.on_external_change(&event.location) {
                applied += 1;
            } else {
                metrics::record_echo_suppressed();
            }
        }
        applied
    }

    /// Ask history to move by `delta`, then apply the resulting events.
    pub fn go(&mut self, delta: isize) -> usize {
        self.history.go(delta);
        self.process_history_events()
    }

    pub fn back(&mut self) -> usize {
        self.go(-1)
    }

    pub fn forward(&mut self) -> usize {
        self.go(1)
    }

    fn announce(&self, previous: CurrentRoute, cause: NavigationCause) {
        tracing::debug!(
            cause = cause.as_str(),
            from = %previous.raw_location,
            to = %self.current.raw_location,
            route = ?self.current.name(),
            "Route changed"
        );
        if !self.current.is_resolved() {
            tracing::warn!(location = %self.current.raw_location, "No route matches location");
        }
        metrics::record_navigation(cause, self.current.state());

        self.listeners.notify(&RouteChange {
            from: &previous,
            to: &self.current,
            cause,
        });
    }
}
