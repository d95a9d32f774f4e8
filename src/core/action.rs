//! Dispatchable actions derived from a reducer mapping.
//!
//! An [`Action`] wraps one reducer behind a stable callable: invoking it
//! applies the reducer to the latest state with the given arguments. The
//! state itself never passes through the caller's hands.

use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// A callable wrapper around one named reducer.
///
/// Calling an action updates the owning state cell in place; there is no
/// return value. The caller supplies only the trailing arguments, and the
/// current state is read from the cell at call time.
///
/// Actions are cheap to clone and retain their identity across clones:
/// two clones of the same action satisfy [`Action::ptr_eq`].
pub struct Action<A> {
    name: Rc<str>,
    dispatch: Rc<dyn Fn(&[A])>,
}

impl<A> Action<A> {
    pub(crate) fn new(name: Rc<str>, dispatch: Rc<dyn Fn(&[A])>) -> Self {
        Self { name, dispatch }
    }

    /// The reducer name this action dispatches to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch with the given arguments.
    ///
    /// Applies the underlying reducer to the latest state synchronously.
    /// A panic inside the reducer propagates to this call site and leaves
    /// the cell's committed state untouched.
    pub fn call(&self, args: &[A]) {
        tracing::trace!(action = %self.name, args = args.len(), "dispatch");
        (self.dispatch)(args);
    }

    /// Whether two handles refer to the same underlying action.
    ///
    /// Identity survives cloning and re-evaluation of the surrounding
    /// component; it is the handle to test when deciding whether derived
    /// work needs to rerun.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.dispatch, &b.dispatch)
    }
}

impl<A> Clone for Action<A> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            dispatch: Rc::clone(&self.dispatch),
        }
    }
}

impl<A> fmt::Debug for Action<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Insertion-ordered mapping of name → [`Action`].
///
/// Produced by [`map_reducers`](crate::core::map_reducers) (usually through
/// [`use_reducers`](crate::hooks::use_reducers)); its key set mirrors the
/// reducer mapping it was derived from, in the same order.
///
/// Indexing by name panics when the action is absent, which suits the
/// common case of a key set that is fixed at construction:
///
/// ```rust
/// use actionmap::{reducers, use_reducers, Scope};
///
/// let mut scope = Scope::new();
/// let (_, actions) = scope.render(|host| {
///     use_reducers(
///         host,
///         reducers! { bump => |s: &i64, _: &[i64]| s + 1 },
///         0i64,
///     )
/// });
///
/// actions["bump"].call(&[]);
/// ```
pub struct Actions<A> {
    map: Rc<IndexMap<String, Action<A>>>,
}

impl<A> Actions<A> {
    pub(crate) fn from_map(map: IndexMap<String, Action<A>>) -> Self {
        Self { map: Rc::new(map) }
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&Action<A>> {
        self.map.get(name)
    }

    /// Check whether an action with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Action names in the derivation's insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// Iterate over `(name, action)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Action<A>)> + '_ {
        self.map.iter().map(|(name, action)| (name.as_str(), action))
    }

    /// Number of actions in the mapping.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether two mappings share the same inner map.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.map, &b.map)
    }
}

impl<A> Clone for Actions<A> {
    fn clone(&self) -> Self {
        Self {
            map: Rc::clone(&self.map),
        }
    }
}

impl<A> fmt::Debug for Actions<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actions")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl<A> Index<&str> for Actions<A> {
    type Output = Action<A>;

    fn index(&self, name: &str) -> &Self::Output {
        match self.map.get(name) {
            Some(action) => action,
            None => panic!("no action named '{name}'"),
        }
    }
}
