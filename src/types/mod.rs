//! Core data types and structures

pub mod status;
pub mod probe;
pub mod history;
pub mod health;
pub mod snapshot;

pub use status::*;
pub use probe::*;
pub use history::*;
pub use health::*;
pub use snapshot::*;
