//! HTTP API serving the rail snapshot

pub mod routes;

pub use routes::*;
