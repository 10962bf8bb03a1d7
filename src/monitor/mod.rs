//! Periodic probe-and-classify loop for the payment rail

pub mod host;
pub mod decision;
pub mod engine;
pub mod scheduler;

pub use host::*;
pub use decision::*;
pub use engine::*;
