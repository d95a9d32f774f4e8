//! Reference single-threaded runtime.
//!
//! This module provides the "imperative shell" around the pure core: a
//! [`Scope`] that owns slot storage, re-evaluates a component on demand,
//! and commits queued state updates between evaluations.
//!
//! # Key Concepts
//!
//! - **Scope**: owns one component's slots across evaluations
//! - **Ctx**: per-evaluation [`Host`](crate::core::Host) handle, keyed by
//!   call order
//! - **Commit**: pending updates become visible at the start of the next
//!   evaluation, never mid-evaluation
//!
//! Embeddings with their own component system skip this module entirely
//! and implement [`Host`](crate::core::Host) themselves.

mod scope;
mod slot;

pub use scope::{Ctx, Scope};
