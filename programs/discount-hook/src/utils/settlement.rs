use crate::utils::SwapAdjustment;
use anchor_lang::prelude::*;
use shared::errors::ErrorCode;
use shared::utils::BpsMath;

/// What the hook does to a single trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Zero discount, or an amount rounding down to 0.
    None,

    /// Taken from the trader on the specified asset, credited to its reserve.
    Penalty { amount: u64 },

    /// Paid to the trader on the unspecified asset, consumed from its reserve.
    Bonus { amount: u64 },

    /// The reserve couldn't cover the bonus, the trade goes through unchanged.
    BonusSkipped { amount: u64, available: u64 },
}

impl Settlement {
    /// Compute the settlement of a trade.
    ///
    /// amount = |amount_specified| * |discount_bp| / 10_000, rounded down.
    ///
    /// # Arguments
    /// * `amount_specified` - The signed magnitude of the trade.
    /// * `discount_bp` - The current discount.
    /// * `bonus_reserve_available` - The balance of the reserve of the unspecified asset.
    pub fn compute(
        amount_specified: i64,
        discount_bp: i64,
        bonus_reserve_available: u64,
    ) -> Result<Self> {
        let amount = BpsMath::apply_bps(
            amount_specified.unsigned_abs(),
            discount_bp.unsigned_abs(),
        )?;

        if amount == 0 {
            return Ok(Settlement::None);
        }

        if discount_bp < 0 {
            Ok(Settlement::Penalty { amount })
        } else if bonus_reserve_available >= amount {
            Ok(Settlement::Bonus { amount })
        } else {
            Ok(Settlement::BonusSkipped {
                amount,
                available: bonus_reserve_available,
            })
        }
    }

    /// Adjustment returned to the trade engine.
    pub fn adjustment(&self) -> Result<SwapAdjustment> {
        let to_delta = |amount: u64| i64::try_from(amount).map_err(|_| error!(ErrorCode::MathOverflow));

        Ok(match *self {
            Settlement::Penalty { amount } => SwapAdjustment {
                specified: to_delta(amount)?,
                unspecified: 0,
            },
            Settlement::Bonus { amount } => SwapAdjustment {
                specified: 0,
                unspecified: -to_delta(amount)?,
            },
            Settlement::None | Settlement::BonusSkipped { .. } => SwapAdjustment::default(),
        })
    }
}
