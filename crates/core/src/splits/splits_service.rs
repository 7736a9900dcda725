use std::borrow::Cow;
use std::collections::HashSet;

use log::debug;
use rust_decimal::Decimal;

use crate::buckets::{default_buckets, Bucket};
use crate::constants::{
    AMOUNT_ROUNDING, DISPLAY_DECIMAL_PRECISION, PAYCHECK_ACCOUNT_ID, PERCENTAGE_TOLERANCE,
    PERCENTAGE_TOTAL,
};
use crate::errors::{Error, Result, ValidationError};

use super::splits_model::{
    AllocationSummary, BucketAllocation, BucketSplit, PaycheckSplit, SplitAmounts,
    TransferInstruction,
};
use super::splits_traits::PaycheckSplitterTrait;

/// Stateless paycheck splitter.
///
/// Holds only its default bucket set, which is never mutated after
/// construction, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PaycheckSplitter {
    default_buckets: Cow<'static, [Bucket]>,
}

impl Default for PaycheckSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl PaycheckSplitter {
    /// Splitter backed by the process-wide default bucket set.
    pub fn new() -> Self {
        PaycheckSplitter {
            default_buckets: Cow::Borrowed(default_buckets()),
        }
    }

    /// Splitter with its own default set. The set must be valid on its own.
    pub fn with_default_buckets(buckets: Vec<Bucket>) -> Result<Self> {
        check_bucket_set(&buckets)?;
        Ok(PaycheckSplitter {
            default_buckets: Cow::Owned(buckets),
        })
    }

    fn effective_buckets<'a>(&'a self, buckets: Option<&'a [Bucket]>) -> &'a [Bucket] {
        match buckets {
            Some(custom) if !custom.is_empty() => custom,
            _ => &*self.default_buckets,
        }
    }

    /// Validates the effective set once and computes its amounts.
    fn allocate<'a>(
        &'a self,
        total_amount: Decimal,
        buckets: Option<&'a [Bucket]>,
    ) -> Result<(&'a [Bucket], SplitAmounts)> {
        let buckets = self.effective_buckets(buckets);
        check_bucket_set(buckets)?;

        let splits = buckets
            .iter()
            .map(|bucket| {
                split_amount(total_amount, bucket).map(|amount| BucketSplit {
                    name: bucket.name.clone(),
                    amount,
                })
            })
            .collect::<Result<SplitAmounts>>()?;

        debug!(
            "Split {} across {} buckets (allocated {})",
            total_amount,
            splits.len(),
            splits.total()
        );
        Ok((buckets, splits))
    }

    fn build_instructions(buckets: &[Bucket], splits: &SplitAmounts) -> Vec<TransferInstruction> {
        buckets
            .iter()
            .zip(splits)
            .map(|(bucket, split)| TransferInstruction {
                from_account: PAYCHECK_ACCOUNT_ID.to_string(),
                to_account: bucket.destination_id.clone(),
                amount: split.amount,
                description: format!(
                    "Automatic transfer to {} ({}%)",
                    bucket.name,
                    display_percentage(bucket.percentage)
                ),
                bucket: bucket.name.clone(),
            })
            .collect()
    }

    fn build_summary(
        total_amount: Decimal,
        buckets: &[Bucket],
        splits: &SplitAmounts,
    ) -> AllocationSummary {
        AllocationSummary {
            total_amount,
            buckets: buckets
                .iter()
                .zip(splits)
                .map(|(bucket, split)| BucketAllocation {
                    name: bucket.name.clone(),
                    percentage: bucket.percentage,
                    amount: split.amount,
                    destination_id: bucket.destination_id.clone(),
                    description: bucket.description.clone(),
                })
                .collect(),
        }
    }
}

impl PaycheckSplitterTrait for PaycheckSplitter {
    fn default_buckets(&self) -> &[Bucket] {
        &self.default_buckets
    }

    fn compute_splits(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<SplitAmounts> {
        let (_, splits) = self.allocate(total_amount, buckets)?;
        Ok(splits)
    }

    fn generate_transfer_instructions(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<Vec<TransferInstruction>> {
        let (buckets, splits) = self.allocate(total_amount, buckets)?;
        Ok(Self::build_instructions(buckets, &splits))
    }

    fn validate_bucket_set(&self, buckets: &[Bucket]) -> bool {
        !buckets.is_empty() && check_bucket_set(buckets).is_ok()
    }

    fn get_allocation_summary(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<AllocationSummary> {
        let (buckets, splits) = self.allocate(total_amount, buckets)?;
        Ok(Self::build_summary(total_amount, buckets, &splits))
    }

    fn split_paycheck(
        &self,
        total_amount: Decimal,
        buckets: Option<&[Bucket]>,
    ) -> Result<PaycheckSplit> {
        let (buckets, splits) = self.allocate(total_amount, buckets)?;
        let transfer_instructions = Self::build_instructions(buckets, &splits);
        let summary = Self::build_summary(total_amount, buckets, &splits);
        Ok(PaycheckSplit {
            splits,
            transfer_instructions,
            summary,
        })
    }
}

/// Checks the percentage sum and name uniqueness of a bucket set.
///
/// An empty set fails the percentage check (its sum is zero).
pub fn check_bucket_set(buckets: &[Bucket]) -> Result<()> {
    let total = buckets
        .iter()
        .try_fold(Decimal::ZERO, |acc, bucket| acc.checked_add(bucket.percentage))
        .ok_or_else(|| Error::Calculation("percentage total overflowed".to_string()))?;

    let deviation = total
        .checked_sub(PERCENTAGE_TOTAL)
        .ok_or_else(|| Error::Calculation("percentage total is out of range".to_string()))?;
    if deviation.abs() >= PERCENTAGE_TOLERANCE {
        return Err(ValidationError::PercentageTotal { total }.into());
    }

    let mut seen = HashSet::with_capacity(buckets.len());
    for bucket in buckets {
        if !seen.insert(bucket.name.as_str()) {
            return Err(ValidationError::DuplicateBucketName(bucket.name.clone()).into());
        }
    }
    Ok(())
}

/// `total_amount * percentage / 100`, rounded half-up to cents.
fn split_amount(total_amount: Decimal, bucket: &Bucket) -> Result<Decimal> {
    total_amount
        .checked_mul(bucket.percentage)
        .and_then(|scaled| scaled.checked_div(PERCENTAGE_TOTAL))
        .map(|amount| amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, AMOUNT_ROUNDING))
        .ok_or_else(|| {
            Error::Calculation(format!(
                "amount for bucket '{}' is out of range",
                bucket.name
            ))
        })
}

/// Percentage as shown in transfer descriptions: whole numbers keep one
/// decimal place (`25.0`), fractional ones print as-is (`37.5`).
pub(crate) fn display_percentage(percentage: Decimal) -> String {
    let normalized = percentage.normalize();
    if normalized.scale() == 0 {
        format!("{:.1}", normalized)
    } else {
        normalized.to_string()
    }
}
