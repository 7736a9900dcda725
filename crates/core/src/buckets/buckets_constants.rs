use std::sync::LazyLock;

use rust_decimal_macros::dec;

use super::buckets_model::Bucket;

/// Default bucket names
pub const SAVINGS_BUCKET: &str = "savings";
pub const SPENDING_BUCKET: &str = "spending";
pub const BRAND_BUCKET: &str = "brand";
pub const INVESTMENTS_BUCKET: &str = "investments";
pub const CRYPTO_BUCKET: &str = "crypto";

static DEFAULT_BUCKETS: LazyLock<Vec<Bucket>> = LazyLock::new(|| {
    vec![
        default_bucket(
            SAVINGS_BUCKET,
            dec!(25),
            "savings_account",
            "Emergency fund and long-term savings",
        ),
        default_bucket(
            SPENDING_BUCKET,
            dec!(20),
            "checking_account",
            "Monthly spending money",
        ),
        default_bucket(
            BRAND_BUCKET,
            dec!(25),
            "brand_account",
            "Personal brand development and growth",
        ),
        default_bucket(
            INVESTMENTS_BUCKET,
            dec!(15),
            "investment_account",
            "Traditional investments",
        ),
        default_bucket(
            CRYPTO_BUCKET,
            dec!(15),
            "crypto_account",
            "Cryptocurrency investments",
        ),
    ]
});

fn default_bucket(
    name: &str,
    percentage: rust_decimal::Decimal,
    destination_id: &str,
    description: &str,
) -> Bucket {
    Bucket {
        name: name.to_string(),
        percentage,
        destination_id: destination_id.to_string(),
        description: description.to_string(),
    }
}

/// The process-wide default bucket set (five buckets summing to 100%).
pub fn default_buckets() -> &'static [Bucket] {
    &DEFAULT_BUCKETS
}
