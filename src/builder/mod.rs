//! Builder API for ergonomic reducer mapping construction.
//!
//! This module provides a fluent builder and a macro for declaring reducer
//! mappings with minimal boilerplate while validating names up front.

pub mod error;
pub mod macros;

pub use error::BuildError;

use indexmap::IndexMap;
use std::rc::Rc;

use crate::core::{ReducerFn, Reducers};

/// Fluent builder for a [`Reducers`] mapping.
///
/// Entries keep their declaration order. `build` rejects empty and
/// duplicate names; for identifier-style declarations the
/// [`reducers!`](crate::reducers) macro wraps this builder.
///
/// # Example
///
/// ```rust
/// use actionmap::builder::ReducersBuilder;
///
/// let mapping = ReducersBuilder::new()
///     .reducer("add", |s: &i64, args: &[i64]| {
///         s + args.first().copied().unwrap_or(1)
///     })
///     .reducer("reset", |_: &i64, _: &[i64]| 0)
///     .build()
///     .unwrap();
///
/// assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["add", "reset"]);
/// ```
pub struct ReducersBuilder<S, A> {
    entries: Vec<(String, ReducerFn<S, A>)>,
}

impl<S, A> ReducersBuilder<S, A> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a named reducer. Order of calls becomes the mapping order.
    pub fn reducer(
        mut self,
        name: impl Into<String>,
        reducer: impl Fn(&S, &[A]) -> S + 'static,
    ) -> Self {
        self.entries.push((name.into(), Rc::new(reducer)));
        self
    }

    /// Add a pre-built [`ReducerFn`], useful with the helper constructors.
    pub fn reducer_fn(mut self, name: impl Into<String>, reducer: ReducerFn<S, A>) -> Self {
        self.entries.push((name.into(), reducer));
        self
    }

    /// Validate names and produce the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyName`] for a `""` name and
    /// [`BuildError::DuplicateReducer`] when a name repeats.
    pub fn build(self) -> Result<Reducers<S, A>, BuildError> {
        let mut map = IndexMap::with_capacity(self.entries.len());
        for (name, reducer) in self.entries {
            if name.is_empty() {
                return Err(BuildError::EmptyName);
            }
            if map.insert(name.clone(), reducer).is_some() {
                return Err(BuildError::DuplicateReducer { name });
            }
        }
        Ok(Reducers::from_map(map))
    }
}

impl<S, A> Default for ReducersBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a reducer that always returns a fixed value.
///
/// # Example
///
/// ```rust
/// use actionmap::builder::{constant, ReducersBuilder};
///
/// let mapping = ReducersBuilder::new()
///     .reducer_fn("reset", constant::<i64, i64>(0))
///     .build()
///     .unwrap();
///
/// let reset = mapping.get("reset").unwrap();
/// assert_eq!(reset(&41, &[7]), 0);
/// ```
pub fn constant<S, A>(value: S) -> ReducerFn<S, A>
where
    S: Clone + 'static,
{
    Rc::new(move |_prev, _args| value.clone())
}

/// Create a reducer from a state-only function, ignoring call arguments.
///
/// # Example
///
/// ```rust
/// use actionmap::builder::{zero_arg, ReducersBuilder};
///
/// let mapping = ReducersBuilder::new()
///     .reducer_fn("toggle", zero_arg::<bool, (), _>(|on| !on))
///     .build()
///     .unwrap();
///
/// let toggle = mapping.get("toggle").unwrap();
/// assert!(toggle(&false, &[]));
/// ```
pub fn zero_arg<S, A, F>(next: F) -> ReducerFn<S, A>
where
    F: Fn(&S) -> S + 'static,
{
    Rc::new(move |prev, _args| next(prev))
}
