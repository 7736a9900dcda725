//! Tests for the bucket model and raw record parsing.

#[cfg(test)]
mod tests {
    use crate::buckets::{default_buckets, parse_bucket_records, Bucket};
    use crate::errors::{BucketRecordError, Error};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    // ==================== Default Set Tests ====================

    #[test]
    fn test_default_buckets_shape() {
        let buckets = default_buckets();
        assert_eq!(buckets.len(), 5);

        let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["savings", "spending", "brand", "investments", "crypto"]
        );

        let total: Decimal = buckets.iter().map(|b| b.percentage).sum();
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn test_default_buckets_is_shared() {
        assert!(std::ptr::eq(default_buckets(), default_buckets()));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_bucket_serializes_destination_as_account_id() {
        let bucket = Bucket::new("savings", dec!(25), "savings_account", "Emergency fund").unwrap();
        let value = serde_json::to_value(&bucket).unwrap();

        assert_eq!(value["name"], "savings");
        assert_eq!(value["percentage"], 25.0);
        assert_eq!(value["account_id"], "savings_account");
        assert_eq!(value["description"], "Emergency fund");
        assert!(value.get("destination_id").is_none());
    }

    #[test]
    fn test_bucket_deserializes_from_wire_shape() {
        let bucket: Bucket = serde_json::from_value(json!({
            "name": "rent",
            "percentage": 33.33,
            "account_id": "landlord",
            "description": ""
        }))
        .unwrap();

        assert_eq!(bucket.name, "rent");
        assert_eq!(bucket.percentage, dec!(33.33));
        assert_eq!(bucket.destination_id, "landlord");
        assert_eq!(bucket.description, "");
    }

    #[test]
    fn test_bucket_deserialize_rejects_missing_field() {
        let result = serde_json::from_value::<Bucket>(json!({
            "name": "rent",
            "percentage": 50
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("account_id"), "unexpected error: {}", err);
    }

    #[test]
    fn test_try_from_borrowed_value() {
        let record = json!({
            "name": "rent",
            "percentage": 40,
            "account_id": "landlord",
            "description": "Monthly rent"
        });
        let bucket = Bucket::try_from(&record).unwrap();
        assert_eq!(bucket.name, "rent");
        assert_eq!(bucket.percentage, dec!(40));
        assert_eq!(bucket.destination_id, "landlord");
        // Borrowed conversion leaves the record usable
        assert_eq!(record["name"], "rent");

        assert_eq!(
            Bucket::try_from(&json!("rent")),
            Err(BucketRecordError::NotAnObject { index: 0 })
        );
    }

    // ==================== Constructor Tests ====================

    #[test]
    fn test_new_rejects_empty_name() {
        let err = Bucket::new("  ", dec!(10), "acc", "desc").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBucket(BucketRecordError::EmptyName { index: 0 })
        ));
    }

    #[test]
    fn test_new_rejects_negative_percentage() {
        let err = Bucket::new("savings", dec!(-5), "acc", "desc").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBucket(BucketRecordError::NegativePercentage { .. })
        ));
    }

    #[test]
    fn test_new_accepts_zero_and_large_percentages() {
        assert!(Bucket::new("zero", Decimal::ZERO, "acc", "").is_ok());
        assert!(Bucket::new("big", dec!(250), "acc", "").is_ok());
    }

    // ==================== Record Parsing Tests ====================

    #[test]
    fn test_parse_records_integer_and_float_percentages() {
        let records = vec![
            json!({"name": "a", "percentage": 60, "account_id": "x", "description": "d"}),
            json!({"name": "b", "percentage": 40.0, "account_id": "y", "description": "d"}),
        ];
        let buckets = parse_bucket_records(&records).unwrap();
        assert_eq!(buckets[0].percentage, dec!(60));
        assert_eq!(buckets[1].percentage, dec!(40));
    }

    #[test]
    fn test_parse_records_reports_index_of_bad_record() {
        let records = vec![
            json!({"name": "a", "percentage": 60, "account_id": "x", "description": "d"}),
            json!({"name": "b", "percentage": "40", "account_id": "y", "description": "d"}),
        ];
        let err = parse_bucket_records(&records).unwrap_err();
        match err {
            Error::MalformedBucket(BucketRecordError::WrongType {
                index,
                field,
                expected,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "percentage");
                assert_eq!(expected, "a number");
            }
            other => panic!("expected WrongType, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_rejects_non_object() {
        let records = vec![json!(["savings", 100])];
        let err = parse_bucket_records(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBucket(BucketRecordError::NotAnObject { index: 0 })
        ));
    }

    #[test]
    fn test_parse_records_null_is_missing() {
        let records = vec![
            json!({"name": "a", "percentage": 100, "account_id": null, "description": "d"}),
        ];
        let err = parse_bucket_records(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBucket(BucketRecordError::MissingField {
                index: 0,
                field: "account_id"
            })
        ));
    }

    #[test]
    fn test_parse_records_wrong_string_type() {
        let records = vec![json!({"name": 7, "percentage": 100, "account_id": "x", "description": "d"})];
        let err = parse_bucket_records(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedBucket(BucketRecordError::WrongType { field: "name", .. })
        ));
    }

    #[test]
    fn test_parse_records_empty_list() {
        assert!(parse_bucket_records(&[]).unwrap().is_empty());
    }
}
