//! Reducer functions and the named reducer mapping.
//!
//! A reducer is a pure function from the previous state and the call
//! arguments to the next state. Reducers never mutate the previous state;
//! they return a new value.

use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// A pure next-state function: `(previous state, call arguments) -> next state`.
///
/// The trailing variadic arguments of an action call are modeled as a slice
/// of the construction's argument type `A`. An optional argument with a
/// default is expressed as `args.first()` with a fallback:
///
/// ```rust
/// use actionmap::core::ReducerFn;
/// use std::rc::Rc;
///
/// // "increment by n, defaulting to 1"
/// let inc: ReducerFn<i64, i64> =
///     Rc::new(|prev, args| prev + args.first().copied().unwrap_or(1));
///
/// assert_eq!(inc(&0, &[]), 1);
/// assert_eq!(inc(&0, &[5]), 5);
/// ```
///
/// Reducers must be pure: the next state is computed from the arguments
/// alone, and the previous state is never mutated in place. Dispatching
/// another action from inside a reducer is an error. The state cell
/// applies reducers synchronously against its latest working value.
pub type ReducerFn<S, A> = Rc<dyn Fn(&S, &[A]) -> S>;

/// Insertion-ordered mapping of name → reducer.
///
/// Names are unique and non-empty (enforced by
/// [`ReducersBuilder`](crate::builder::ReducersBuilder)); iteration follows
/// insertion order. Cloning only bumps a reference count on the shared
/// inner map, so callers can rebuild and pass the mapping on every
/// evaluation of the surrounding component.
///
/// # Example
///
/// ```rust
/// use actionmap::reducers;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let mapping = reducers! {
///     add => |s: &Counter, args: &[i64]| Counter {
///         count: s.count + args.first().copied().unwrap_or(1),
///     },
///     reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
/// };
///
/// assert_eq!(mapping.len(), 2);
/// assert!(mapping.contains("add"));
/// assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["add", "reset"]);
/// ```
pub struct Reducers<S, A> {
    map: Rc<IndexMap<String, ReducerFn<S, A>>>,
}

impl<S, A> Reducers<S, A> {
    pub(crate) fn from_map(map: IndexMap<String, ReducerFn<S, A>>) -> Self {
        Self { map: Rc::new(map) }
    }

    /// Look up a reducer by name.
    pub fn get(&self, name: &str) -> Option<&ReducerFn<S, A>> {
        self.map.get(name)
    }

    /// Check whether a reducer with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Reducer names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// Iterate over `(name, reducer)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReducerFn<S, A>)> + '_ {
        self.map.iter().map(|(name, reducer)| (name.as_str(), reducer))
    }

    /// Number of reducers in the mapping.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether two mappings share the same inner map.
    ///
    /// Useful for verifying cheap-clone behavior in tests.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.map, &b.map)
    }
}

// Manual impl: a derive would demand `S: Clone + A: Clone` for no reason.
impl<S, A> Clone for Reducers<S, A> {
    fn clone(&self) -> Self {
        Self {
            map: Rc::clone(&self.map),
        }
    }
}

impl<S, A> fmt::Debug for Reducers<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducers")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
