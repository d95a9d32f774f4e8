//! Core mapping types and logic.
//!
//! This module contains the pure functional core of the crate:
//! - Reducer functions and the named mapping via [`Reducers`]
//! - Stable-identity [`Action`] wrappers and their [`Actions`] mapping
//! - Initial state handling via [`Initial`]
//! - The [`Host`] capability seam ([`StateCell`], [`Latest`])
//! - The [`map_reducers`] derivation
//!
//! Nothing here owns state or schedules work. All state ownership lives
//! behind the [`Host`] capabilities, following the "pure core, imperative
//! shell" philosophy; the shell shipped with this crate is
//! [`runtime`](crate::runtime).

mod action;
mod host;
mod initial;
mod mapper;
mod reducer;

pub use action::{Action, Actions};
pub use host::{Host, Latest, StateCell};
pub use initial::Initial;
pub use mapper::map_reducers;
pub use reducer::{ReducerFn, Reducers};
