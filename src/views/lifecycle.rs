//! Per-view load state machine.
//!
//! A view enters `Loading` on mount or refresh and receives a ticket. Only a
//! result carrying the current ticket, delivered while the view is still
//! mounted, moves it out of `Loading`.

use crate::api::ApiError;

/// Data a view can hold; lists count as empty when they have no rows
pub trait Resource {
    fn is_empty_resource(&self) -> bool {
        false
    }
}

impl<T> Resource for Vec<T> {
    fn is_empty_resource(&self) -> bool {
        self.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Empty,
    Failed(String),
}

/// Generation number issued on entering `Loading`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct ViewModel<T> {
    state: ViewState<T>,
    generation: u64,
    mounted: bool,
}

impl<T: Resource> Default for ViewModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ViewModel<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
            mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) -> Ticket {
        self.mounted = true;
        self.begin()
    }

    /// Refetch after a mutation; supersedes any pending ticket
    pub fn refresh(&mut self) -> Ticket {
        self.begin()
    }

    fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading;
        Ticket(self.generation)
    }

    /// Apply a fetch result. Returns false when the result was stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if !self.mounted || ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "Discarding stale result");
            return false;
        }

        self.state = match result {
            Ok(data) if data.is_empty_resource() => ViewState::Empty,
            Ok(data) => ViewState::Ready(data),
            Err(e) => {
                tracing::error!(error = %e, "View load failed");
                ViewState::Failed(e.user_message())
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
