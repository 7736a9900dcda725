//! Split result models.

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Amount computed for a single bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSplit {
    pub name: String,
    pub amount: Decimal,
}

/// Per-bucket split amounts, in bucket-set order.
///
/// Serializes as a JSON object `{ name: amount, ... }` whose keys keep the
/// bucket-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAmounts {
    entries: Vec<BucketSplit>,
}

impl SplitAmounts {
    /// Amount allocated to the named bucket.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.amount)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BucketSplit> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all rounded amounts.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount).sum()
    }
}

impl FromIterator<BucketSplit> for SplitAmounts {
    fn from_iter<I: IntoIterator<Item = BucketSplit>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SplitAmounts {
    type Item = &'a BucketSplit;
    type IntoIter = std::slice::Iter<'a, BucketSplit>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for SplitAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.amount)?;
        }
        map.end()
    }
}

/// A proposed movement of funds from the paycheck account into a bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferInstruction {
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    pub description: String,
    /// Name of the bucket this transfer funds
    pub bucket: String,
}

/// One bucket line of an allocation summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketAllocation {
    pub name: String,
    pub percentage: Decimal,
    pub amount: Decimal,
    #[serde(rename = "account_id")]
    pub destination_id: String,
    pub description: String,
}

/// Total amount plus the per-bucket breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationSummary {
    pub total_amount: Decimal,
    pub buckets: Vec<BucketAllocation>,
}

/// Everything derived from one paycheck: amounts, instructions, and summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaycheckSplit {
    pub splits: SplitAmounts,
    pub transfer_instructions: Vec<TransferInstruction>,
    pub summary: AllocationSummary,
}
