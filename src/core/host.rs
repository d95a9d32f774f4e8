//! Host capabilities: the seam between the mapping logic and the runtime
//! that owns state.
//!
//! [`use_reducers`](crate::hooks::use_reducers) is written against these
//! traits, not against a concrete runtime. The crate ships a reference
//! runtime in [`runtime`](crate::runtime); an embedding with its own
//! component system implements [`Host`] instead.

use std::cell::RefCell;
use std::rc::Rc;

/// A slot of state owned by the host.
///
/// `update` takes a pure updater `&S -> S` rather than a replacement value:
/// the cell applies it to its **latest working value**, so several updates
/// dispatched within one evaluation fold together instead of overwriting
/// each other. Two `|n| n + 1` updates in a row advance the state by 2.
///
/// Updaters must be pure. Dispatching another action from inside an
/// updater re-enters the cell and fails loudly.
pub trait StateCell<S> {
    /// Snapshot of the committed state.
    fn get(&self) -> S;

    /// Queue a pure updater against the latest working value.
    fn update(&self, updater: &dyn Fn(&S) -> S);
}

/// Single-writer holder for the most recent value of something that is
/// re-supplied on every evaluation.
///
/// Readers that captured a `Latest` handle earlier always observe the
/// newest write, never the value that was current when they captured it.
/// This is the mechanism that keeps long-lived actions dispatching to the
/// freshest reducers.
///
/// ```rust
/// use actionmap::Latest;
///
/// let holder = Latest::new(1);
/// let reader = holder.clone();
///
/// holder.replace(2);
/// assert_eq!(reader.with(|v| *v), 2);
/// ```
pub struct Latest<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Latest<T> {
    /// Create a holder seeded with `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Overwrite the held value.
    pub fn replace(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Read the held value through a closure.
    ///
    /// The borrow lasts only for the closure; holding it across a
    /// `replace` on the same holder panics.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.inner.borrow())
    }

    /// Whether two handles share the same holder.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T> Clone for Latest<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// What a runtime must provide for [`use_reducers`](crate::hooks::use_reducers)
/// to run inside it.
///
/// All three capabilities are slot-based: on the first evaluation they
/// create, on re-evaluations they return the slot created the first time.
/// Hosts key slots by call order, so callers must invoke capabilities in
/// the same order on every evaluation.
pub trait Host {
    /// A state slot. Returns the committed snapshot and a shared cell
    /// handle for updates. `init` runs only when the slot is created.
    fn state_cell<S, F>(&mut self, init: F) -> (S, Rc<dyn StateCell<S>>)
    where
        S: Clone + 'static,
        F: FnOnce() -> S;

    /// A memoized value. `compute` runs when the slot is created and
    /// whenever `deps` differs from the previous evaluation; otherwise the
    /// cached value is returned and keeps its identity.
    fn memo<D, T, F>(&mut self, deps: D, compute: F) -> Rc<T>
    where
        D: PartialEq + 'static,
        T: 'static,
        F: FnOnce() -> T;

    /// A [`Latest`] holder slot. `init` seeds it on creation; the same
    /// holder comes back on every re-evaluation.
    fn latest<T, F>(&mut self, init: F) -> Latest<T>
    where
        T: 'static,
        F: FnOnce() -> T;
}
