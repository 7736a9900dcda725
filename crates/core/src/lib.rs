//! Paysplit Core - paycheck allocation models, engine, and traits.
//!
//! This crate holds the allocation engine: it validates a set of percentage
//! buckets and splits a paycheck amount across them. It performs no I/O and
//! keeps no mutable state; the HTTP surface lives in `paysplit-server`.

pub mod buckets;
pub mod constants;
pub mod errors;
pub mod splits;

// Re-export the engine surface
pub use buckets::*;
pub use splits::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
