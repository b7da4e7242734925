use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode::MathOverflow;
use anchor_lang::prelude::*;

/// The rounding mode for the math operations
pub enum Rounding {
    Floor,
    Ceiling,
}

/// Basis points helpers. Every intermediate product is computed in u128 so that
/// `u64::MAX * MAX_DISCOUNT_BP` never overflows before the division.
pub struct BpsMath;

impl BpsMath {
    /// Compute `value * numerator / denominator`.
    ///
    /// # Arguments
    /// * `value` - The value to scale.
    /// * `numerator` - The numerator.
    /// * `denominator` - The denominator, must not be 0.
    /// * `rounding` - The rounding mode.
    ///
    /// Returns the result as a u64, errors if it doesn't fit.
    pub fn mul_div(value: u64, numerator: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
        let product = (value as u128)
            .checked_mul(numerator as u128)
            .ok_or(MathOverflow)?;
        let denominator = denominator as u128;

        let result = match rounding {
            Rounding::Floor => product.checked_div(denominator).ok_or(MathOverflow)?,
            Rounding::Ceiling => {
                let quotient = product.checked_div(denominator).ok_or(MathOverflow)?;
                if product % denominator == 0 {
                    quotient
                } else {
                    quotient.checked_add(1).ok_or(MathOverflow)?
                }
            }
        };

        u64::try_from(result).map_err(|_| error!(MathOverflow))
    }

    /// Portion of `amount` represented by `bps` basis points, rounded down.
    /// {amount} = {amount} * {bp} / 10_000
    pub fn apply_bps(amount: u64, bps: u64) -> Result<u64> {
        BpsMath::mul_div(amount, bps, BPS_DENOMINATOR, Rounding::Floor)
    }

    /// Ceiling division of two non-zero values.
    pub fn ceil_div(numerator: u64, denominator: u64) -> Result<u64> {
        BpsMath::mul_div(numerator, 1, denominator, Rounding::Ceiling)
    }
}
