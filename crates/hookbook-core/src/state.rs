use std::rc::Rc;

use crate::{Signal, remember, signal};

// State holder pattern
pub trait StateHolder: 'static {
    type State: 'static;
    type Action: 'static;

    fn initial_state() -> Self::State;
    /// Pure transition. Must build a new state rather than edit `state`.
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

/// Send actions to a remembered reducer. Each dispatch swaps in a fresh `Rc`,
/// so consumers can detect change by identity.
pub struct Dispatch<H: StateHolder> {
    state: Signal<Rc<H::State>>,
}

impl<H: StateHolder> Clone for Dispatch<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<H: StateHolder> Dispatch<H> {
    pub fn new(initial: H::State) -> Self {
        Self {
            state: signal(Rc::new(initial)),
        }
    }

    pub fn dispatch(&self, action: H::Action) {
        self.state.update(|current| {
            let next = H::reduce(current, action);
            *current = Rc::new(next);
        });
    }

    /// Latest committed state.
    pub fn state(&self) -> Rc<H::State> {
        self.state.get()
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }
}

pub fn remember_reducer<H: StateHolder>() -> (Rc<H::State>, Dispatch<H>) {
    let dispatch = remember(|| Dispatch::<H>::new(H::initial_state()));
    let dispatch = dispatch.as_ref().clone();
    (dispatch.state(), dispatch)
}
