use crate::utils::AuctionConfig;
use anchor_lang::prelude::*;
use shared::constants::MAX_BUCKETS;

/// Running state of the auction of a venue.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct AuctionState {
    pub active: bool,

    /// Scaled in seconds
    pub start_time: u64,

    /// When the last cycle ended, scaled in seconds. Gates the next automatic start.
    pub last_execution_time: u64,

    /// Last committed discount. Never decreases within a cycle.
    pub last_discount_bp: i64,

    /// Bucketed mode only
    pub last_updated_bucket: u32,

    /// Bit i is set once bucket i has been committed in the current cycle.
    pub committed_buckets: u32,

    /// Snapshot taken when the cycle started
    pub config: AuctionConfig,
}

impl AuctionState {
    pub fn elapsed(&self, current_time: u64) -> u64 {
        current_time.saturating_sub(self.start_time)
    }

    pub fn is_expired(&self, current_time: u64) -> bool {
        self.elapsed(current_time) >= self.config.duration
    }

    /// Public linear schedule.
    ///
    /// discount(t) = min(start + rate * elapsed, reserve), reserve once the duration elapsed.
    /// An inactive auction has no discount.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    pub fn linear_discount(&self, current_time: u64) -> i64 {
        if !self.active {
            return 0;
        }

        if self.is_expired(current_time) {
            return self.config.reserve_discount_bp;
        }

        let raw = (self.config.start_discount_bp as i128)
            + (self.config.decay_rate_bp_per_sec as i128) * (self.elapsed(current_time) as i128);

        raw.min(self.config.reserve_discount_bp as i128) as i64
    }

    /// Bucket index at `current_time`, clamped to the last bucket of the cycle.
    pub fn current_bucket(&self, current_time: u64) -> Result<u32> {
        let last_bucket = self.config.bucket_count()?.saturating_sub(1);
        let bucket = self.elapsed(current_time) / self.config.bucket_seconds;

        Ok(u32::try_from(bucket).unwrap_or(u32::MAX).min(last_bucket))
    }

    pub fn is_bucket_committed(&self, bucket: u32) -> bool {
        bucket < MAX_BUCKETS as u32 && self.committed_buckets & (1u32 << bucket) != 0
    }
}
