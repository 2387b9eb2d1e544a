//! Backend test support utilities
//!
//! Shared by the backend's integration test binaries: one logging bootstrap
//! and a few fixed card layouts written as text tokens, so this crate does
//! not depend on the backend itself.

pub mod cards;
pub mod logging;
