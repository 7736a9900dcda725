use rust_decimal::Decimal;

use crate::buckets::Bucket;
use crate::errors::Result;

use super::splits_model::{AllocationSummary, PaycheckSplit, SplitAmounts, TransferInstruction};

/// Trait for paycheck splitting operations.
///
/// Every operation taking `buckets: Option<&[Bucket]>` falls back to the
/// splitter's default set when the argument is `None` or an empty slice.
pub trait PaycheckSplitterTrait: Send + Sync {
    /// The bucket set used when the caller supplies none.
    fn default_buckets(&self) -> &[Bucket];

    /// Splits `total_amount` across the buckets, rounded to cents.
    fn compute_splits(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<SplitAmounts>;

    /// One transfer instruction per bucket, in bucket order.
    fn generate_transfer_instructions(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<Vec<TransferInstruction>>;

    /// Advisory check; never errors.
    fn validate_bucket_set(&self, buckets: &[Bucket]) -> bool;

    fn get_allocation_summary(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<AllocationSummary>;

    /// Amounts, instructions, and summary from a single validation pass.
    fn split_paycheck(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<PaycheckSplit>;
}
