use crate::events::AuctionStarted;
use crate::state::{EvaluationQueue, HookConfig, Venue};
use crate::utils::{AuctionConfig, EncryptedEvaluator, Role};
use anchor_lang::prelude::*;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// Start a cycle manually.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
/// * `evaluation_queue` - The evaluation queue of the venue (PDA) (mut, not signer), required by bucketed venues.
#[derive(Accounts)]
pub struct StartAuction<'info> {
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

    #[account(mut)]
    pub evaluation_queue: Option<AccountLoader<'info, EvaluationQueue>>,
}

/// Start a cycle.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `config` - The config of the cycle, the venue's default config if None.
pub fn handler(ctx: Context<StartAuction>, config: Option<AuctionConfig>) -> Result<()> {
    ctx.accounts
        .hook_config
        .validate_role(&ctx.accounts.admin.key(), Role::Admin)?;

    let current_time = Clock::get()?.unix_timestamp as u64;
    let venue_key = ctx.accounts.venue.key();

    let mut evaluation_queue =
        EvaluationQueue::load_for_venue(&ctx.accounts.evaluation_queue, &venue_key)?;

    let venue = &mut ctx.accounts.venue;
    venue.start_auction(
        current_time,
        config,
        evaluation_queue
            .as_deref_mut()
            .map(|queue| queue as &mut dyn EncryptedEvaluator),
    )?;

    emit!(AuctionStarted {
        venue: venue_key,
        mode: venue.mode,
        start_time: current_time,
        config: venue.auction.config,
        context: venue.cycle_context(),
    });

    Ok(())
}
