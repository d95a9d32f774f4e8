//! Hook slot storage for the reference scope.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::StateCell;

/// Commit half of a state slot: move the pending value into committed.
pub(crate) trait Commit {
    /// Returns true when a pending value was applied.
    fn commit(&self) -> bool;
}

/// One capability slot, keyed by call order within an evaluation.
pub(crate) enum Slot {
    State {
        cell: Rc<dyn Any>,
        commit: Rc<dyn Commit>,
    },
    Memo {
        deps: Box<dyn Any>,
        value: Rc<dyn Any>,
    },
    Latest(Box<dyn Any>),
}

impl Slot {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::State { .. } => "state",
            Self::Memo { .. } => "memo",
            Self::Latest(_) => "latest",
        }
    }
}

/// Scope-owned storage for one piece of state.
///
/// Updates fold eagerly into a pending working value; `commit` publishes
/// it as the committed snapshot. Reads between updates keep returning the
/// committed value, so a burst of dispatches observes a consistent base.
pub(crate) struct StateSlot<S> {
    committed: RefCell<S>,
    pending: RefCell<Option<S>>,
    dirty: Rc<Cell<bool>>,
}

impl<S: Clone> StateSlot<S> {
    pub(crate) fn new(initial: S, dirty: Rc<Cell<bool>>) -> Self {
        Self {
            committed: RefCell::new(initial),
            pending: RefCell::new(None),
            dirty,
        }
    }
}

impl<S: Clone> StateCell<S> for StateSlot<S> {
    fn get(&self) -> S {
        self.committed.borrow().clone()
    }

    fn update(&self, updater: &dyn Fn(&S) -> S) {
        // Held across the updater call: a dispatch from inside a reducer
        // re-borrows here and fails loudly.
        let mut pending = self.pending.borrow_mut();

        let next = {
            let committed;
            let base: &S = match pending.as_ref() {
                Some(working) => working,
                None => {
                    committed = self.committed.borrow();
                    &committed
                }
            };
            updater(base)
        };

        *pending = Some(next);
        self.dirty.set(true);
    }
}

impl<S: Clone> Commit for StateSlot<S> {
    fn commit(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(next) => {
                *self.committed.borrow_mut() = next;
                true
            }
            None => false,
        }
    }
}
