// ============================================================================
// COLLECTION - Fetch-on-mount snapshot shared by the list screens
// ============================================================================
// Every list screen follows the same cycle: Idle -> Loading -> Loaded on
// mount, full replace on refetch, local splice on delete. A failed fetch
// keeps whatever was already loaded; a failed first fetch leaves the
// collection empty in `Error`.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::errors::RequestError;
use crate::models::{Examination, Patient};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Anything with a server-assigned id
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Examination {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub phase: ViewPhase,
    pub items: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Idle,
            items: Vec::new(),
        }
    }
}

/// Client-held copy of a server collection
pub struct Collection<T> {
    state: ReactiveState<Snapshot<T>>,
}

impl<T: Clone + Identified + 'static> Collection<T> {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(Snapshot::default()),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.with(|s| s.phase)
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.with(|s| s.items.iter().any(|item| item.id() == id))
    }

    pub fn begin_load(&self) {
        self.state.update(|s| s.phase = ViewPhase::Loading);
    }

    /// Apply a fetch result. Returns the error back so the caller can notify.
    pub fn finish_load(&self, result: Result<Vec<T>, RequestError>) -> Result<usize, RequestError> {
        match result {
            Ok(items) => {
                let count = items.len();
                self.state.set(Snapshot {
                    phase: ViewPhase::Loaded,
                    items,
                });
                Ok(count)
            }
            Err(e) => {
                self.state.update(|s| {
                    s.phase = if s.items.is_empty() {
                        ViewPhase::Error
                    } else {
                        ViewPhase::Loaded
                    };
                });
                Err(e)
            }
        }
    }

    /// Splice one item out after a successful delete; no refetch
    pub fn remove(&self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.state.update(|s| s.items.retain(|item| item.id() != id));
        true
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Snapshot<T>) + 'static,
    {
        self.state.subscribe(callback)
    }
}

impl<T: Clone + Identified + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

/// Alive flag of a mounted screen. Responses that resolve after `teardown`
/// are dropped instead of being written into a screen nobody shows.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    alive: Rc<Cell<bool>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn teardown(&self) {
        self.alive.set(false);
    }

    /// `true` when a response should be applied; logs the drop otherwise
    pub fn accepts(&self, what: &str) -> bool {
        if !self.is_alive() {
            log::debug!("🚫 [VIEW] Dropping {} that resolved after teardown", what);
        }
        self.is_alive()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
