//! Network reachability probing

pub mod probe;

pub use probe::*;
