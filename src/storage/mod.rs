//! Shared in-memory state

pub mod state;

pub use state::*;
