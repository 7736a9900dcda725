//! Core error types for the paycheck allocation engine.
//!
//! Two families of failure are kept apart: structural problems with a bucket
//! record (missing fields, wrong JSON types) and semantic problems with a
//! well-formed bucket set (percentages not adding up, duplicate names).

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed bucket record: {0}")]
    MalformedBucket(#[from] BucketRecordError),

    #[error("Split calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for a bucket set that is structurally sound.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Percentages did not add up to 100. Carries the actual sum.
    #[error("Total percentage must equal 100%, got {total}%")]
    PercentageTotal { total: Decimal },

    #[error("Bucket name '{0}' appears more than once")]
    DuplicateBucketName(String),
}

/// Errors raised while turning a raw record into a [`Bucket`](crate::buckets::Bucket).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BucketRecordError {
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("record {index}: required field '{field}' is missing")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field '{field}' must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("record {index}: bucket name must not be empty")]
    EmptyName { index: usize },

    #[error("record {index}: percentage must not be negative, got {percentage}")]
    NegativePercentage { index: usize, percentage: Decimal },
}
