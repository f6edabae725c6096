//! Store abstraction over the single `ClientState`.
//!
//! Handlers only touch state through short synchronous closures, so no borrow
//! is ever held across an `.await`. The UI uses a Dioxus signal; tests and
//! non-UI callers use a plain shared cell.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::ClientState;

pub trait ClientStore: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R;
}

/// Signal-backed store; writes re-render every subscribed component.
#[derive(Clone, Copy)]
pub struct SignalStore {
    state: Signal<ClientState>,
}

impl SignalStore {
    pub fn new(state: Signal<ClientState>) -> Self {
        Self { state }
    }

    /// The underlying signal, for components that render from it.
    pub fn signal(&self) -> Signal<ClientState> {
        self.state
    }
}

impl ClientStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R {
        self.state.with(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R {
        let mut state = self.state;
        state.with_mut(f)
    }
}

/// In-memory store without a reactive runtime.
#[derive(Clone, Default)]
pub struct SharedStore {
    state: Rc<RefCell<ClientState>>,
}

impl SharedStore {
    pub fn new(state: ClientState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }
}

impl ClientStore for SharedStore {
    fn read<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }
}
