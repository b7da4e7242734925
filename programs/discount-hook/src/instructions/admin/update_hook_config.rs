use crate::events::HookConfigSet;
use crate::state::HookConfig;
use crate::utils::Role;
use anchor_lang::prelude::*;
use shared::constants::HOOK_CONFIG_SEEDS;

/// Update the hook config.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct UpdateHookConfig<'info> {
    pub admin: Signer<'info>,

    #[account(mut,
        seeds = [HOOK_CONFIG_SEEDS],
        bump = hook_config.bump
    )]
    pub hook_config: Account<'info, HookConfig>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<UpdateHookConfig>,
    new_admin: Option<Pubkey>,
    engine_authority: Option<Pubkey>,
    coprocessor: Option<Pubkey>,
    executor_program: Option<Pubkey>,
    auction_interval: Option<u64>,
    finalizer_reward_lamports: Option<u64>,
) -> Result<()> {
    let hook_config = &mut ctx.accounts.hook_config;

    hook_config.validate_role(&ctx.accounts.admin.key(), Role::Admin)?;

    hook_config.update(
        new_admin,
        engine_authority,
        coprocessor,
        executor_program,
        auction_interval,
        finalizer_reward_lamports,
    );

    emit!(HookConfigSet {
        admin: hook_config.admin,
        engine_authority: hook_config.engine_authority,
        coprocessor: hook_config.coprocessor,
        executor_program: hook_config.executor_program,
        auction_interval: hook_config.auction_interval,
        finalizer_reward_lamports: hook_config.finalizer_reward_lamports,
    });

    Ok(())
}
