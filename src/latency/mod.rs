//! Latency windows and status classification

pub mod window;
pub mod evaluator;

pub use window::*;
pub use evaluator::*;
