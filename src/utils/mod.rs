//! Utility functions and helpers

pub mod logging;
pub mod net;
pub mod display;
pub mod signal;

pub use logging::*;
pub use net::*;
pub use display::*;
pub use signal::*;
