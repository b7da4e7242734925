use crate::utils::{AuctionConfig, AuctionEndReason, DiscountMode};
use anchor_lang::prelude::*;

#[event]
pub struct HookConfigSet {
    pub admin: Pubkey,
    pub engine_authority: Pubkey,
    pub coprocessor: Pubkey,
    pub executor_program: Pubkey,
    pub auction_interval: u64,
    pub finalizer_reward_lamports: u64,
}

#[event]
pub struct VenueInitialized {
    pub venue: Pubkey,
    pub venue_id: [u8; 32],
    pub mode: DiscountMode,
    pub asset_0: Pubkey,
    pub asset_1: Pubkey,
}

#[event]
pub struct VenueConfigSet {
    pub venue: Pubkey,
    pub mode: DiscountMode,
    pub config: AuctionConfig,
}

#[event]
pub struct EncryptedParamsSet {
    pub venue: Pubkey,
}

#[event]
pub struct AuctionStarted {
    pub venue: Pubkey,
    pub mode: DiscountMode,
    pub start_time: u64,
    pub config: AuctionConfig,
    pub context: [u8; 32],
}

#[event]
pub struct AuctionEnded {
    pub venue: Pubkey,
    pub end_time: u64,
    pub discount_bp: i64,
    pub reason: AuctionEndReason,
}

#[event]
pub struct BucketFinalized {
    pub venue: Pubkey,
    pub bucket: u32,
    pub discount_bp: i64,
}

#[event]
pub struct BucketPending {
    pub venue: Pubkey,
    pub bucket: u32,
}

#[event]
pub struct EvaluationIgnored {
    pub venue: Pubkey,
    pub bucket: u32,
}

#[event]
pub struct EvaluationSubmitted {
    pub venue: Pubkey,
    pub handle: u64,
    pub result_bp: i64,
}

#[event]
pub struct PenaltyApplied {
    pub venue: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub discount_bp: i64,
}

#[event]
pub struct BonusApplied {
    pub venue: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub discount_bp: i64,
}

#[event]
pub struct BonusSkipped {
    pub venue: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub available: u64,
}

#[event]
pub struct ExecutionScheduled {
    pub venue: Pubkey,
}

#[event]
pub struct ExecutionTriggered {
    pub venue: Pubkey,
    pub executor_program: Pubkey,
}

#[event]
pub struct FinalizerRewardPaid {
    pub venue: Pubkey,
    pub finalizer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FinalizerRewardSkipped {
    pub venue: Pubkey,
    pub finalizer: Pubkey,
    pub amount: u64,
}
