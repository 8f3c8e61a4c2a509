//! Mutators of [`GraphContext`](crate::GraphContext).
//!
//! These are plain `&mut self` methods on the context, split by concern:
//!
//! - `vertex`: vertex insertion and removal, property writes
//! - `edge`: edge insertion and removal
//!
//! None of them lock. Callers are expected to hold exclusive access, which
//! [`GraphManager`](crate::GraphManager) guarantees by running each call
//! under its write lock. Every method either fails before touching state
//! or applies its whole change and bumps the version exactly once.

mod edge;
mod vertex;
