//! Initial state: a literal value or a deferred initializer.

use std::fmt;

/// The initial state supplied to [`use_reducers`](crate::hooks::use_reducers).
///
/// A literal value seeds the cell directly. A lazy initializer defers an
/// expensive computation; the host runs it at most once, on the first
/// evaluation, and never again on re-evaluations.
///
/// Literal values convert implicitly:
///
/// ```rust
/// use actionmap::Initial;
///
/// let literal: Initial<i64> = 42.into();
/// assert_eq!(literal.produce(), 42);
///
/// let lazy = Initial::lazy(|| "expensive".to_string());
/// assert_eq!(lazy.produce(), "expensive");
/// ```
pub enum Initial<S> {
    /// A ready value.
    Value(S),
    /// A deferred initializer, run at most once.
    Lazy(Box<dyn FnOnce() -> S>),
}

impl<S> Initial<S> {
    /// Wrap an initializer closure to be run on first use only.
    pub fn lazy(init: impl FnOnce() -> S + 'static) -> Self {
        Self::Lazy(Box::new(init))
    }

    /// Produce the initial state, running the initializer if deferred.
    pub fn produce(self) -> S {
        match self {
            Self::Value(value) => value,
            Self::Lazy(init) => init(),
        }
    }
}

impl<S> From<S> for Initial<S> {
    fn from(value: S) -> Self {
        Self::Value(value)
    }
}

impl<S: fmt::Debug> fmt::Debug for Initial<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Initial::Value").field(value).finish(),
            Self::Lazy(_) => f.write_str("Initial::Lazy(..)"),
        }
    }
}
