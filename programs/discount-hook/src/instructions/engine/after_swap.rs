use crate::events::{AuctionEnded, ExecutionScheduled};
use crate::state::{EvaluationQueue, HookConfig, Venue};
use crate::utils::{AuctionEndReason, EncryptedEvaluator, Role};
use anchor_lang::prelude::*;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// Called by the trade engine after a trade completed.
/// Engine only.
///
/// # Arguments
/// * `engine_authority` - The trade engine authority (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
/// * `evaluation_queue` - The evaluation queue of the venue (PDA) (mut, not signer), required by bucketed venues.
#[derive(Accounts)]
pub struct AfterSwap<'info> {
    pub engine_authority: Signer<'info>,

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

/// End the cycle if the trade was favorable (positive discount) or the cycle expired.
///
/// A favorable end schedules the executor, called later through `execute_trigger` so that a
/// failing executor never reverts the trade.
pub fn handler(ctx: Context<AfterSwap>) -> Result<()> {
    let hook_config = &ctx.accounts.hook_config;
    hook_config.validate_role(&ctx.accounts.engine_authority.key(), Role::Engine)?;

    let current_time = Clock::get()?.unix_timestamp as u64;
    let venue_key = ctx.accounts.venue.key();

    let mut evaluation_queue =
        EvaluationQueue::load_for_venue(&ctx.accounts.evaluation_queue, &venue_key)?;

    let venue = &mut ctx.accounts.venue;

    let update = venue.update_and_get(
        current_time,
        evaluation_queue
            .as_deref_mut()
            .map(|queue| queue as &mut dyn EncryptedEvaluator),
    )?;

    update.outcome.emit_transition(venue_key);

    let discount_bp = update.discount_bp;
    let has_executor = hook_config.has_executor();

    let Some(reason) = venue.settle_after_trade(current_time, discount_bp, has_executor)? else {
        return Ok(());
    };

    emit!(AuctionEnded {
        venue: venue_key,
        end_time: current_time,
        discount_bp,
        reason,
    });

    if reason == AuctionEndReason::Favorable && has_executor {
        emit!(ExecutionScheduled { venue: venue_key });
    }

    Ok(())
}
