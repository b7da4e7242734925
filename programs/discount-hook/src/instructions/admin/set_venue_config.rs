use crate::events::VenueConfigSet;
use crate::state::{HookConfig, Venue};
use crate::utils::{AuctionConfig, DiscountMode, Role};
use anchor_lang::prelude::*;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// Change the mode and default config of a venue, while no cycle is running.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct SetVenueConfig<'info> {
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

pub fn handler(
    ctx: Context<SetVenueConfig>,
    mode: DiscountMode,
    config: AuctionConfig,
) -> Result<()> {
    ctx.accounts
        .hook_config
        .validate_role(&ctx.accounts.admin.key(), Role::Admin)?;

    let venue_key = ctx.accounts.venue.key();
    ctx.accounts.venue.set_default_config(mode, config)?;

    emit!(VenueConfigSet {
        venue: venue_key,
        mode,
        config,
    });

    Ok(())
}
