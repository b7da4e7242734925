use crate::utils::DiscountMode;
use anchor_lang::prelude::*;
use shared::{
    check_condition,
    constants::{MAX_AUCTION_DURATION, MAX_BUCKETS, MAX_DISCOUNT_BP},
    errors::ErrorCode,
    utils::BpsMath,
};

/// Parameters of one auction cycle, snapshotted when the cycle starts.
///
/// Discounts are signed basis points: negative is a penalty charged to the trader, positive a
/// bonus paid to the trader.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct AuctionConfig {
    /// Discount at the start of the cycle, usually a penalty
    pub start_discount_bp: i64,

    /// Cap of the discount, reached at the latest when the duration elapses
    pub reserve_discount_bp: i64,

    /// Linear mode only
    pub decay_rate_bp_per_sec: u64,

    /// Scaled in seconds
    pub duration: u64,

    /// Bucketed mode only, scaled in seconds
    pub bucket_seconds: u64,
}

impl AuctionConfig {
    pub const SERIALIZED_LEN: usize = 40;

    /// Validate the config for the given mode.
    ///
    /// Checks:
    /// * 0 < duration <= MAX_AUCTION_DURATION
    /// * -MAX_DISCOUNT_BP <= start <= reserve <= MAX_DISCOUNT_BP
    /// * Bucketed: bucket_seconds > 0, duration >= bucket_seconds, at most MAX_BUCKETS buckets
    pub fn validate(&self, mode: DiscountMode) -> Result<()> {
        check_condition!(
            self.duration > 0 && self.duration <= MAX_AUCTION_DURATION,
            InvalidAuctionDuration
        );

        check_condition!(
            self.start_discount_bp >= -MAX_DISCOUNT_BP
                && self.start_discount_bp <= self.reserve_discount_bp
                && self.reserve_discount_bp <= MAX_DISCOUNT_BP,
            InvalidDiscountRange
        );

        if mode == DiscountMode::Bucketed {
            check_condition!(
                self.bucket_seconds > 0 && self.duration >= self.bucket_seconds,
                InvalidBucketSeconds
            );

            let bucket_count = self.bucket_count()?;
            check_condition!((bucket_count as usize) <= MAX_BUCKETS, TooManyBuckets);
        }

        Ok(())
    }

    /// Number of buckets in a cycle, the last one can be shorter than `bucket_seconds`.
    pub fn bucket_count(&self) -> Result<u32> {
        let count = BpsMath::ceil_div(self.duration, self.bucket_seconds)?;

        u32::try_from(count).map_err(|_| error!(ErrorCode::MathOverflow))
    }

    /// Fixed little-endian encoding, used to bind evaluations to a cycle.
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_LEN] {
        let mut bytes = [0u8; Self::SERIALIZED_LEN];

        bytes[0..8].copy_from_slice(&self.start_discount_bp.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.reserve_discount_bp.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.decay_rate_bp_per_sec.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.duration.to_le_bytes());
        bytes[32..40].copy_from_slice(&self.bucket_seconds.to_le_bytes());

        bytes
    }
}
