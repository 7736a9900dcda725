use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Account every transfer instruction is drawn from
pub const PAYCHECK_ACCOUNT_ID: &str = "paycheck_account";

/// Required sum of bucket percentages
pub const PERCENTAGE_TOTAL: Decimal = dec!(100);

/// Largest accepted deviation (exclusive) of the percentage sum from 100
pub const PERCENTAGE_TOLERANCE: Decimal = dec!(0.01);

/// Decimal precision for split amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Half-up rounding for split amounts
pub const AMOUNT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;
