//! Discount Hook Program
//!
//! Attached to a trade engine, charges a time-decaying discount on the trades of each venue.
//! Early trades of an auction cycle pay a penalty credited to the fund ledger, later trades get a
//! bonus paid from it. The first favorable trade ends the cycle and schedules the executor.
//!
//! Two schedules are available per venue: a public linear decay, and a bucketed decay whose
//! values are evaluated by an off-chain coprocessor from encrypted parameters.
//!
//! # Instructions
//!
//! * `init_hook_config` - Initialize the hook config and signer (bootstrap admin only).
//! * `update_hook_config` - Update the roles, executor, interval and finalizer reward.
//! * `init_venue` - Initialize a venue and its evaluation queue.
//! * `set_venue_config` - Change the mode and default config of an idle venue.
//! * `set_encrypted_params` - Arm the encrypted params of the next cycle.
//! * `start_auction` - Start a cycle manually.
//! * `end_auction` - End a cycle manually.
//! * `before_swap` - Settle a trade, returns the adjustment (engine only).
//! * `after_swap` - End the cycle after a favorable trade (engine only).
//! * `submit_evaluation` - Fulfill an evaluation request (coprocessor only).
//! * `finalize_current_bucket` - Commit the current bucket, rewards the caller (permissionless).
//! * `execute_trigger` - Call the executor after a favorable cycle (permissionless).
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

use instructions::*;
use utils::{AuctionConfig, DiscountMode, SwapAdjustment};

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("6DscHk9vGfRm3Tq2WbXyZcNpAaE4uLs7JkQwRtYh8VnM");

#[program]
pub mod discount_hook {

    use super::*;

    /*
    Admin functions
     */
    pub fn init_hook_config(
        ctx: Context<InitHookConfig>,
        engine_authority: Pubkey,
        coprocessor: Pubkey,
        executor_program: Pubkey,
        auction_interval: Option<u64>,
        finalizer_reward_lamports: Option<u64>,
    ) -> Result<()> {
        init_hook_config::handler(
            ctx,
            engine_authority,
            coprocessor,
            executor_program,
            auction_interval,
            finalizer_reward_lamports,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_hook_config(
        ctx: Context<UpdateHookConfig>,
        new_admin: Option<Pubkey>,
        engine_authority: Option<Pubkey>,
        coprocessor: Option<Pubkey>,
        executor_program: Option<Pubkey>,
        auction_interval: Option<u64>,
        finalizer_reward_lamports: Option<u64>,
    ) -> Result<()> {
        update_hook_config::handler(
            ctx,
            new_admin,
            engine_authority,
            coprocessor,
            executor_program,
            auction_interval,
            finalizer_reward_lamports,
        )
    }

    pub fn init_venue(
        ctx: Context<InitVenue>,
        venue_id: [u8; 32],
        mode: DiscountMode,
        asset_0: Pubkey,
        asset_1: Pubkey,
        default_config: AuctionConfig,
    ) -> Result<()> {
        init_venue::handler(ctx, venue_id, mode, asset_0, asset_1, default_config)
    }

    pub fn set_venue_config(
        ctx: Context<SetVenueConfig>,
        mode: DiscountMode,
        config: AuctionConfig,
    ) -> Result<()> {
        set_venue_config::handler(ctx, mode, config)
    }

    pub fn set_encrypted_params(
        ctx: Context<SetEncryptedParams>,
        encrypted_tau: [u8; 32],
        encrypted_eps: [u8; 32],
    ) -> Result<()> {
        set_encrypted_params::handler(ctx, encrypted_tau, encrypted_eps)
    }

    pub fn start_auction(ctx: Context<StartAuction>, config: Option<AuctionConfig>) -> Result<()> {
        start_auction::handler(ctx, config)
    }

    pub fn end_auction(ctx: Context<EndAuction>) -> Result<()> {
        end_auction::handler(ctx)
    }

    /*
    Engine functions
     */
    pub fn before_swap(
        ctx: Context<BeforeSwap>,
        zero_for_one: bool,
        amount_specified: i64,
    ) -> Result<SwapAdjustment> {
        before_swap::handler(ctx, zero_for_one, amount_specified)
    }

    pub fn after_swap(ctx: Context<AfterSwap>) -> Result<()> {
        after_swap::handler(ctx)
    }

    /*
    Coprocessor functions
     */
    pub fn submit_evaluation(
        ctx: Context<SubmitEvaluation>,
        handle: u64,
        context: [u8; 32],
        result_bp: i64,
    ) -> Result<()> {
        submit_evaluation::handler(ctx, handle, context, result_bp)
    }

    /*
    Crank functions
     */
    pub fn finalize_current_bucket(ctx: Context<FinalizeCurrentBucket>) -> Result<()> {
        finalize_current_bucket::handler(ctx)
    }

    pub fn execute_trigger<'info>(
        ctx: Context<'_, '_, 'info, 'info, ExecuteTrigger<'info>>,
    ) -> Result<()> {
        execute_trigger::handler(ctx)
    }
}
