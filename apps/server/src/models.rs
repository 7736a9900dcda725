use paysplit_core::{self as domain, SplitAmounts};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Bucket {
    pub name: String,
    pub percentage: Decimal,
    pub account_id: String,
    pub description: String,
}

impl From<&domain::Bucket> for Bucket {
    fn from(b: &domain::Bucket) -> Self {
        Self {
            name: b.name.clone(),
            percentage: b.percentage,
            account_id: b.destination_id.clone(),
            description: b.description.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TransferInstruction {
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    pub description: String,
    pub bucket: String,
}

impl From<domain::TransferInstruction> for TransferInstruction {
    fn from(t: domain::TransferInstruction) -> Self {
        Self {
            from_account: t.from_account,
            to_account: t.to_account,
            amount: t.amount,
            description: t.description,
            bucket: t.bucket,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BucketAllocation {
    pub name: String,
    pub percentage: Decimal,
    pub amount: Decimal,
    pub account_id: String,
    pub description: String,
}

impl From<domain::BucketAllocation> for BucketAllocation {
    fn from(a: domain::BucketAllocation) -> Self {
        Self {
            name: a.name,
            percentage: a.percentage,
            amount: a.amount,
            account_id: a.destination_id,
            description: a.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AllocationSummary {
    pub total_amount: Decimal,
    pub buckets: Vec<BucketAllocation>,
}

impl From<domain::AllocationSummary> for AllocationSummary {
    fn from(s: domain::AllocationSummary) -> Self {
        Self {
            total_amount: s.total_amount,
            buckets: s.buckets.into_iter().map(BucketAllocation::from).collect(),
        }
    }
}

/// Body of `POST /paycheck/split`.
///
/// Custom buckets are kept as raw JSON so malformed records can be reported
/// per record instead of failing the whole body.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct PaycheckSplitRequest {
    pub amount: Decimal,
    #[serde(default)]
    #[schema(value_type = Option<Vec<Bucket>>)]
    pub custom_buckets: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct PaycheckSplitResponse {
    /// Bucket name to amount, in bucket order
    #[schema(value_type = Object)]
    pub splits: SplitAmounts,
    pub transfer_instructions: Vec<TransferInstruction>,
    pub summary: AllocationSummary,
}

impl From<domain::PaycheckSplit> for PaycheckSplitResponse {
    fn from(p: domain::PaycheckSplit) -> Self {
        Self {
            splits: p.splits,
            transfer_instructions: p
                .transfer_instructions
                .into_iter()
                .map(TransferInstruction::from)
                .collect(),
            summary: p.summary.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DefaultBucketsResponse {
    pub buckets: Vec<Bucket>,
}
