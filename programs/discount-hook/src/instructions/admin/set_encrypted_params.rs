use crate::events::EncryptedParamsSet;
use crate::state::{HookConfig, Venue};
use crate::utils::Role;
use anchor_lang::prelude::*;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// Arm the encrypted params of the next cycle of a venue.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct SetEncryptedParams<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [HOOK_CONFIG_SEEDS],
        bump = hook_config.bump
    )]
    pub hook_config: Account<'info, HookConfig>,

    #[account(mut,
        seeds = [VENUE_SEEDS, venue.venue_id.as_ref()],
        bump = venue.bump
    )]
    pub venue: Box<Account<'info, Venue>>,
}

/// The params are ciphertexts produced off-chain for the coprocessor.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `encrypted_tau` - The encrypted time shift.
/// * `encrypted_eps` - The encrypted slope perturbation.
pub fn handler(
    ctx: Context<SetEncryptedParams>,
    encrypted_tau: [u8; 32],
    encrypted_eps: [u8; 32],
) -> Result<()> {
    ctx.accounts
        .hook_config
        .validate_role(&ctx.accounts.admin.key(), Role::Admin)?;

    let venue_key = ctx.accounts.venue.key();
    ctx.accounts
        .venue
        .set_encrypted_params(encrypted_tau, encrypted_eps)?;

    emit!(EncryptedParamsSet { venue: venue_key });

    Ok(())
}
