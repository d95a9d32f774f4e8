//! Actionmap: reducer mappings with stable action identities
//!
//! Actionmap turns a named mapping of pure reducers into a matching set of
//! dispatchable actions. The mapping logic is composed of pure functions
//! with no side effects; state ownership and re-evaluation live behind the
//! [`Host`] capability seam, with a reference single-threaded [`Scope`]
//! provided in [`runtime`].
//!
//! # Core Concepts
//!
//! - **Reducers**: Pure `(previous state, args) -> next state` functions,
//!   registered under unique names
//! - **Actions**: Stable-identity wrappers that dispatch a named reducer
//!   against the latest state
//! - **Latest-wins**: Actions look their reducer up at call time, so a
//!   handle captured on an early evaluation dispatches to the mapping
//!   supplied on the most recent one
//!
//! # Example
//!
//! ```rust
//! use actionmap::{reducers, use_reducers, Scope};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! let mut scope = Scope::new();
//! let counter = |host: &mut actionmap::Ctx<'_>| {
//!     use_reducers(
//!         host,
//!         reducers! {
//!             increment => |s: &Counter, args: &[i64]| Counter {
//!                 count: s.count + args.first().copied().unwrap_or(1),
//!             },
//!             reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
//!         },
//!         Counter { count: 0 },
//!     )
//! };
//!
//! let (state, actions) = scope.render(counter);
//! assert_eq!(state.count, 0);
//!
//! actions["increment"].call(&[5]);
//! actions["increment"].call(&[]);
//!
//! let (state, _) = scope.render(counter);
//! assert_eq!(state.count, 6);
//!
//! actions["reset"].call(&[]);
//! let (state, _) = scope.render(counter);
//! assert_eq!(state.count, 0);
//! ```

pub mod builder;
pub mod core;
pub mod hooks;
pub mod runtime;

// Re-export commonly used types
pub use crate::builder::{BuildError, ReducersBuilder};
pub use crate::core::{Action, Actions, Host, Initial, Latest, Reducers, StateCell};
pub use crate::hooks::use_reducers;
pub use crate::runtime::{Ctx, Scope};
