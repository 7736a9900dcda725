//! Bucket domain model and the checked boundary for raw bucket records.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{BucketRecordError, Result};

/// A named allocation target.
///
/// On the wire the destination is called `account_id`:
/// `{ "name", "percentage", "account_id", "description" }`.
/// Deserialization goes through [`Bucket::from_record`], so malformed records
/// are rejected with a [`BucketRecordError`] instead of a generic serde error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Value")]
pub struct Bucket {
    /// Unique within a bucket set
    pub name: String,
    /// Share in percentage points. No per-bucket upper bound.
    pub percentage: Decimal,
    #[serde(rename = "account_id")]
    pub destination_id: String,
    pub description: String,
}

impl Bucket {
    /// Builds a bucket from already-typed fields.
    pub fn new(
        name: impl Into<String>,
        percentage: Decimal,
        destination_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::checked(
            name.into(),
            percentage,
            destination_id.into(),
            description.into(),
            0,
        )?)
    }

    /// Builds a bucket from a raw JSON record at position `index` of its set.
    pub fn from_record(
        record: &Value,
        index: usize,
    ) -> std::result::Result<Self, BucketRecordError> {
        let fields = record
            .as_object()
            .ok_or(BucketRecordError::NotAnObject { index })?;

        let name = string_field(fields, "name", index)?;
        let percentage = decimal_field(fields, "percentage", index)?;
        let destination_id = string_field(fields, "account_id", index)?;
        let description = string_field(fields, "description", index)?;

        Self::checked(name, percentage, destination_id, description, index)
    }

    fn checked(
        name: String,
        percentage: Decimal,
        destination_id: String,
        description: String,
        index: usize,
    ) -> std::result::Result<Self, BucketRecordError> {
        if name.trim().is_empty() {
            return Err(BucketRecordError::EmptyName { index });
        }
        if percentage.is_sign_negative() && !percentage.is_zero() {
            return Err(BucketRecordError::NegativePercentage { index, percentage });
        }
        Ok(Self {
            name,
            percentage,
            destination_id,
            description,
        })
    }
}

impl TryFrom<Value> for Bucket {
    type Error = BucketRecordError;

    fn try_from(record: Value) -> std::result::Result<Self, Self::Error> {
        Bucket::from_record(&record, 0)
    }
}

impl TryFrom<&Value> for Bucket {
    type Error = BucketRecordError;

    fn try_from(record: &Value) -> std::result::Result<Self, Self::Error> {
        Bucket::from_record(record, 0)
    }
}

/// Converts a list of raw records into buckets, reporting the first bad record.
pub fn parse_bucket_records(records: &[Value]) -> Result<Vec<Bucket>> {
    let buckets = records
        .iter()
        .enumerate()
        .map(|(index, record)| Bucket::from_record(record, index))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(buckets)
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> std::result::Result<String, BucketRecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(BucketRecordError::MissingField { index, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(BucketRecordError::WrongType {
            index,
            field,
            expected: "a string",
        }),
    }
}

fn decimal_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> std::result::Result<Decimal, BucketRecordError> {
    let wrong_type = BucketRecordError::WrongType {
        index,
        field,
        expected: "a number",
    };
    match fields.get(field) {
        None | Some(Value::Null) => Err(BucketRecordError::MissingField { index, field }),
        Some(Value::Number(n)) => {
            let value = if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            };
            value.ok_or(wrong_type)
        }
        Some(_) => Err(wrong_type),
    }
}
