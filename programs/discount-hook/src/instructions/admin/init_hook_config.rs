use crate::events::HookConfigSet;
use crate::state::{HookConfig, HookSigner};
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::{
    DEFAULT_AUCTION_INTERVAL, DEFAULT_FINALIZER_REWARD_LAMPORTS, HOOK_CONFIG_SEEDS,
    HOOK_SIGNER_SEEDS,
};
use shared::errors::ErrorCode;

/// Initialize the hook config and the hook signer.
/// Bootstrap admin only.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `admin` - The admin account (mut, signer).
/// * `hook_config` - The hook config account (PDA) (init, not signer).
/// * `hook_signer` - The hook signer account (PDA) (init, not signer).
#[derive(Accounts)]
pub struct InitHookConfig<'info> {
    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = HookConfig::SIZE,
        seeds = [HOOK_CONFIG_SEEDS],
        bump
    )]
    pub hook_config: Account<'info, HookConfig>,

    #[account(
        init,
        payer = admin,
        space = HookSigner::SIZE,
        seeds = [HOOK_SIGNER_SEEDS],
        bump
    )]
    pub hook_signer: Account<'info, HookSigner>,
}

impl InitHookConfig<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Admin is the bootstrap admin.
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, Unauthorized);

        Ok(())
    }
}

/// Initialize the hook config.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `engine_authority` - The signer of the swap notifications.
/// * `coprocessor` - The signer of the evaluation results.
/// * `executor_program` - The program called after a favorable cycle, default pubkey if none.
/// * `auction_interval` - The minimum time between two cycles, scaled in seconds. Defaults to 5 minutes.
/// * `finalizer_reward_lamports` - The reward paid for finalizing a bucket. Defaults to 5000 lamports.
pub fn handler(
    ctx: Context<InitHookConfig>,
    engine_authority: Pubkey,
    coprocessor: Pubkey,
    executor_program: Pubkey,
    auction_interval: Option<u64>,
    finalizer_reward_lamports: Option<u64>,
) -> Result<()> {
    ctx.accounts.validate()?;

    let auction_interval = auction_interval.unwrap_or(DEFAULT_AUCTION_INTERVAL);
    let finalizer_reward_lamports =
        finalizer_reward_lamports.unwrap_or(DEFAULT_FINALIZER_REWARD_LAMPORTS);

    let admin = ctx.accounts.admin.key();

    ctx.accounts.hook_signer.bump = ctx.bumps.hook_signer;

    let hook_config = &mut ctx.accounts.hook_config;
    hook_config.init(
        ctx.bumps.hook_config,
        admin,
        engine_authority,
        coprocessor,
        executor_program,
        auction_interval,
        finalizer_reward_lamports,
    );

    emit!(HookConfigSet {
        admin,
        engine_authority,
        coprocessor,
        executor_program,
        auction_interval,
        finalizer_reward_lamports,
    });

    Ok(())
}
