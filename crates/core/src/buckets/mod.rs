//! Buckets module - bucket model, record parsing, and the default set.

mod buckets_constants;
mod buckets_model;

#[cfg(test)]
mod buckets_model_tests;

pub use buckets_constants::*;
pub use buckets_model::{parse_bucket_records, Bucket};
