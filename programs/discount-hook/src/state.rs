use crate::utils::{AuctionConfig, AuctionState, DiscountMode, EncryptedParams};
use anchor_lang::prelude::*;
use shared::constants::MAX_BUCKETS;

/// Global config of the hook, shared by every venue.
///
/// PDA Seeds ["hook_config"]
#[account]
#[derive(Default, InitSpace)]
pub struct HookConfig {
    pub bump: u8,

    pub admin: Pubkey,

    /// Signs the `before_swap` and `after_swap` notifications
    pub engine_authority: Pubkey,

    /// Fulfills the evaluation requests of the bucketed schedule
    pub coprocessor: Pubkey,

    /// Program called once a cycle ends favorably, default pubkey if none
    pub executor_program: Pubkey,

    /// Minimum time between the end of a cycle and the next automatic start, scaled in seconds
    pub auction_interval: u64,

    /// Paid from the venue account to whoever finalizes a bucket
    pub finalizer_reward_lamports: u64,
}

impl HookConfig {
    pub const SIZE: usize = 8 + HookConfig::INIT_SPACE;
}

/// PDA of the hook signing the settlement calls into the fund ledger.
///
/// PDA Seeds ["hook_signer"]
#[account]
#[derive(Default, InitSpace)]
pub struct HookSigner {
    pub bump: u8,
}

impl HookSigner {
    pub const SIZE: usize = 8 + HookSigner::INIT_SPACE;
}

/// A trading venue (pair of assets) and its auction.
///
/// PDA Seeds ["venue", venue id]
#[account]
#[derive(Default, InitSpace)]
pub struct Venue {
    pub bump: u8,

    /// Identifier chosen by the trade engine for the pair
    pub venue_id: [u8; 32],

    pub mode: DiscountMode,

    pub asset_0: Pubkey,

    pub asset_1: Pubkey,

    /// Used when a cycle starts without an explicit config
    pub default_config: AuctionConfig,

    pub auction: AuctionState,

    pub encrypted_params: EncryptedParams,

    /// Evaluation handle requested for each bucket of the current cycle, 0 if not requested yet
    pub bucket_handles: [u64; MAX_BUCKETS],

    /// A cycle ended favorably and the executor wasn't called yet
    pub pending_execution: bool,
}

impl Venue {
    pub const SIZE: usize = 8 + Venue::INIT_SPACE;
}

/// Evaluation request sent to the coprocessor, stored in the venue's queue.
///
/// zero_copy
#[zero_copy]
#[derive(Default)]
pub struct EvaluationRequest {
    /// 0 means the slot is empty
    pub handle: u64,

    pub bucket: u32,

    /// One of `EvaluationRequest::PENDING` or `EvaluationRequest::READY`
    pub status: u8,

    pub _padding: [u8; 3],

    /// Set by the coprocessor
    pub result_bp: i64,

    /// Hash binding the request to its cycle
    pub context: [u8; 32],

    pub encrypted_tau: [u8; 32],

    pub encrypted_eps: [u8; 32],
}

impl EvaluationRequest {
    pub const PENDING: u8 = 1;
    pub const READY: u8 = 2;
}

/// Requests of a venue waiting for, or fulfilled by, the coprocessor. The coprocessor watches
/// the pending slots and answers with `submit_evaluation`.
///
/// Handles are never reused, the slot of a handle is `handle % MAX_BUCKETS`, so a slot only
/// gets overwritten once a whole cycle worth of newer requests was made.
///
/// zero_copy
/// PDA Seeds ["evaluation_queue", venue pubkey]
#[account(zero_copy)]
#[derive(Default)]
pub struct EvaluationQueue {
    pub bump: u8,

    pub _padding: [u8; 7],

    pub venue: Pubkey,

    /// Last handle given out, handles start at 1
    pub next_handle: u64,

    pub requests: [EvaluationRequest; MAX_BUCKETS],
}

impl EvaluationQueue {
    pub const SIZE: usize = 8 + std::mem::size_of::<EvaluationQueue>();
}
