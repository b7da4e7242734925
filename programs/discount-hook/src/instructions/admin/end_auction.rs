use crate::events::AuctionEnded;
use crate::state::{HookConfig, Venue};
use crate::utils::{AuctionEndReason, Role};
use anchor_lang::prelude::*;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// End the running cycle manually. The executor is not triggered.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct EndAuction<'info> {
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

pub fn handler(ctx: Context<EndAuction>) -> Result<()> {
    ctx.accounts
        .hook_config
        .validate_role(&ctx.accounts.admin.key(), Role::Admin)?;

    let current_time = Clock::get()?.unix_timestamp as u64;
    let venue_key = ctx.accounts.venue.key();

    let venue = &mut ctx.accounts.venue;
    let discount_bp = venue.current_discount(current_time);
    venue.end_auction(current_time)?;

    emit!(AuctionEnded {
        venue: venue_key,
        end_time: current_time,
        discount_bp,
        reason: AuctionEndReason::Manual,
    });

    Ok(())
}
