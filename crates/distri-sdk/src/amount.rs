//! Conversion between human-facing decimal token amounts and the integer
//! smallest-unit amounts the program works in.

use crate::{constants::TOKEN_DECIMALS, SdkError, SdkResult};
use rust_decimal::{prelude::ToPrimitive, Decimal};

fn scale_factor() -> Decimal {
    Decimal::from(10u64.pow(TOKEN_DECIMALS))
}

/// `1.5` -> `1_500_000_000`. Rejects negative amounts, amounts with more
/// than `TOKEN_DECIMALS` fractional digits, and amounts that overflow `u64`.
pub fn ui_amount_to_base_units(amount: Decimal) -> SdkResult<u64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(SdkError::AmountOutOfRange(format!(
            "{} is negative",
            amount
        )));
    }

    let scaled = amount
        .checked_mul(scale_factor())
        .ok_or_else(|| SdkError::AmountOutOfRange(format!("{} overflows", amount)))?;

    if !scaled.fract().is_zero() {
        return Err(SdkError::AmountOutOfRange(format!(
            "{} has more than {} decimal places",
            amount, TOKEN_DECIMALS
        )));
    }

    scaled
        .to_u64()
        .ok_or_else(|| SdkError::AmountOutOfRange(format!("{} does not fit in u64", amount)))
}

/// `1_500_000_000` -> `1.5`
pub fn base_units_to_ui_amount(base_units: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(base_units), TOKEN_DECIMALS).normalize()
}
