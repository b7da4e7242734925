use anchor_lang::prelude::*;

/*
Included in build

ADMIN
*/
include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Denominator for every discount expressed in basis points.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Discounts (penalty or bonus) can never exceed 100% of the specified amount.
pub const MAX_DISCOUNT_BP: i64 = 10_000;

pub const MAX_AUCTION_DURATION: u64 = 604800; // 1 week

/// Minimum time between the end of an auction and the next automatic start.
pub const DEFAULT_AUCTION_INTERVAL: u64 = 300; // 5 minutes

/// Maximum number of buckets in one bucketed auction cycle, also the size of the evaluation queue.
pub const MAX_BUCKETS: usize = 32;

/// Number of buckets requested ahead of the current one.
pub const PRIMING_DEPTH: u32 = 2;

/// Lamports paid to whoever commits a bucket, unless configured otherwise.
pub const DEFAULT_FINALIZER_REWARD_LAMPORTS: u64 = 5_000;
