//! A single-threaded scope that evaluates components and owns their slots.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use crate::core::{Host, Latest, StateCell};
use crate::runtime::slot::{Commit, Slot, StateSlot};

/// Owns the slots behind a component and re-evaluates it on demand.
///
/// Each [`render`](Scope::render) evaluates the component once: pending
/// state updates are committed first, then the component runs against the
/// fresh snapshots. Dispatching an action queues an update and marks the
/// scope dirty; the embedding decides when to render again.
///
/// # Example
///
/// ```rust
/// use actionmap::{reducers, use_reducers, Scope};
///
/// let mut scope = Scope::new();
///
/// let counter = |host: &mut actionmap::Ctx<'_>| {
///     use_reducers(
///         host,
///         reducers! {
///             add => |s: &i64, args: &[i64]| s + args.first().copied().unwrap_or(1),
///         },
///         0i64,
///     )
/// };
///
/// let (count, actions) = scope.render(counter);
/// assert_eq!(count, 0);
///
/// actions["add"].call(&[]);
/// actions["add"].call(&[5]);
/// assert!(scope.is_dirty());
///
/// let (count, _) = scope.render(counter);
/// assert_eq!(count, 6);
/// ```
pub struct Scope {
    slots: Vec<Slot>,
    dirty: Rc<Cell<bool>>,
    sealed: bool,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            dirty: Rc::new(Cell::new(false)),
            sealed: false,
        }
    }

    /// Whether updates have been queued since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Commit pending updates, then evaluate the component.
    ///
    /// The first render creates one slot per capability call and seals the
    /// slot list; every later render must repeat the same calls in the
    /// same order.
    ///
    /// # Panics
    ///
    /// Panics when an evaluation uses more, fewer, or differently-typed
    /// capability calls than the first evaluation did.
    pub fn render<R>(&mut self, component: impl FnOnce(&mut Ctx<'_>) -> R) -> R {
        self.flush();

        let mut ctx = Ctx {
            slots: &mut self.slots,
            cursor: 0,
            dirty: &self.dirty,
            sealed: self.sealed,
        };
        let output = component(&mut ctx);
        let used = ctx.cursor;

        if self.sealed && used < self.slots.len() {
            panic!(
                "evaluation used {used} of {} capability slots; \
                 a scope's capability calls must keep a stable order",
                self.slots.len()
            );
        }
        self.sealed = true;
        output
    }

    /// Apply queued updates to their slots and clear the dirty flag.
    fn flush(&mut self) {
        let mut committed = 0usize;
        for slot in &self.slots {
            if let Slot::State { commit, .. } = slot {
                if commit.commit() {
                    committed += 1;
                }
            }
        }
        if committed > 0 {
            tracing::debug!(slots = committed, "committed pending state");
        }
        self.dirty.set(false);
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability access for one evaluation of a component.
///
/// Handed to the component closure by [`Scope::render`]; implements
/// [`Host`] by keying each capability call to a slot by call order.
pub struct Ctx<'a> {
    slots: &'a mut Vec<Slot>,
    cursor: usize,
    dirty: &'a Rc<Cell<bool>>,
    sealed: bool,
}

impl Ctx<'_> {
    fn advance(&mut self) -> usize {
        let index = self.cursor;
        self.cursor += 1;
        if self.sealed && index >= self.slots.len() {
            panic!(
                "capability call #{index} exceeds the {} calls of the first evaluation; \
                 a scope's capability calls must keep a stable order",
                self.slots.len()
            );
        }
        index
    }
}

fn slot_kind_mismatch(index: usize, found: &str, requested: &str) -> ! {
    panic!(
        "slot #{index} was '{found}' on the first evaluation, now requested as '{requested}'; \
         a scope's capability calls must keep a stable order"
    )
}

impl Host for Ctx<'_> {
    fn state_cell<S, F>(&mut self, init: F) -> (S, Rc<dyn StateCell<S>>)
    where
        S: Clone + 'static,
        F: FnOnce() -> S,
    {
        let index = self.advance();
        if index == self.slots.len() {
            let slot = Rc::new(StateSlot::new(init(), Rc::clone(self.dirty)));
            tracing::trace!(slot = index, kind = "state", "created slot");
            self.slots.push(Slot::State {
                cell: Rc::clone(&slot) as Rc<dyn Any>,
                commit: Rc::clone(&slot) as Rc<dyn Commit>,
            });
            return (slot.get(), slot as Rc<dyn StateCell<S>>);
        }

        let slot = match &self.slots[index] {
            Slot::State { cell, .. } => Rc::clone(cell)
                .downcast::<StateSlot<S>>()
                .unwrap_or_else(|_| {
                    panic!("slot #{index} holds a different state type than requested")
                }),
            other => slot_kind_mismatch(index, other.kind(), "state"),
        };
        (slot.get(), slot as Rc<dyn StateCell<S>>)
    }

    fn memo<D, T, F>(&mut self, deps: D, compute: F) -> Rc<T>
    where
        D: PartialEq + 'static,
        T: 'static,
        F: FnOnce() -> T,
    {
        let index = self.advance();
        if index == self.slots.len() {
            let value = Rc::new(compute());
            tracing::trace!(slot = index, kind = "memo", "created slot");
            self.slots.push(Slot::Memo {
                deps: Box::new(deps),
                value: Rc::clone(&value) as Rc<dyn Any>,
            });
            return value;
        }

        match &mut self.slots[index] {
            Slot::Memo { deps: stored, value } => {
                let unchanged = stored.downcast_ref::<D>().is_some_and(|prev| *prev == deps);
                if !unchanged {
                    let fresh = Rc::new(compute());
                    *stored = Box::new(deps);
                    *value = Rc::clone(&fresh) as Rc<dyn Any>;
                    tracing::trace!(slot = index, "memo recomputed");
                    return fresh;
                }
                Rc::clone(value).downcast::<T>().unwrap_or_else(|_| {
                    panic!("slot #{index} holds a memo of a different type than requested")
                })
            }
            other => slot_kind_mismatch(index, other.kind(), "memo"),
        }
    }

    fn latest<T, F>(&mut self, init: F) -> Latest<T>
    where
        T: 'static,
        F: FnOnce() -> T,
    {
        let index = self.advance();
        if index == self.slots.len() {
            let holder = Latest::new(init());
            tracing::trace!(slot = index, kind = "latest", "created slot");
            self.slots.push(Slot::Latest(Box::new(holder.clone())));
            return holder;
        }

        match &self.slots[index] {
            Slot::Latest(holder) => holder
                .downcast_ref::<Latest<T>>()
                .unwrap_or_else(|| {
                    panic!("slot #{index} holds a latest value of a different type than requested")
                })
                .clone(),
            other => slot_kind_mismatch(index, other.kind(), "latest"),
        }
    }
}
