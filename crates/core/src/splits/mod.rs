//! Splits module - the allocation engine, its result models, and trait.

mod splits_model;
mod splits_service;
mod splits_traits;


pub use splits_model::{
    AllocationSummary, BucketAllocation, BucketSplit, PaycheckSplit, SplitAmounts,
    TransferInstruction,
};
pub use splits_service::{check_bucket_set, PaycheckSplitter};
pub use splits_traits::PaycheckSplitterTrait;
