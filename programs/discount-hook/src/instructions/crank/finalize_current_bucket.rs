use crate::events::{BucketPending, FinalizerRewardPaid, FinalizerRewardSkipped};
use crate::state::{EvaluationQueue, HookConfig, Venue};
use crate::utils::{pay_finalizer_reward, FinalizeOutcome};
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};
use shared::errors::ErrorCode;

/// Finalize the current bucket of a venue.
/// Permissionless.
///
/// # Arguments
/// * `finalizer` - The caller, receives the finalizer reward (mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
/// * `evaluation_queue` - The evaluation queue of the venue (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct FinalizeCurrentBucket<'info> {
    #[account(mut)]
    pub finalizer: Signer<'info>,

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
    pub evaluation_queue: AccountLoader<'info, EvaluationQueue>,
}

/// Commit the evaluation of the current bucket if it is ready. Safe to call any number of
/// times, the reward is only paid the first time a bucket is committed and only if the venue
/// account holds enough lamports above its rent exempt minimum.
pub fn handler(ctx: Context<FinalizeCurrentBucket>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp as u64;
    let venue_key = ctx.accounts.venue.key();

    let outcome = {
        let evaluation_queue = &mut ctx.accounts.evaluation_queue.load_mut()?;
        check_condition!(
            evaluation_queue.venue == venue_key,
            InvalidEvaluationQueue
        );

        ctx.accounts
            .venue
            .finalize_current_bucket(current_time, &mut **evaluation_queue)?
    };

    if let FinalizeOutcome::NotReady { bucket } = outcome {
        emit!(BucketPending {
            venue: venue_key,
            bucket,
        });
    }

    outcome.emit_transition(venue_key);

    if outcome.rewards_finalizer() {
        reward_finalizer(&ctx, venue_key)?;
    }

    Ok(())
}

fn reward_finalizer(ctx: &Context<FinalizeCurrentBucket>, venue_key: Pubkey) -> Result<()> {
    let hook_config = &ctx.accounts.hook_config;
    let amount = hook_config.finalizer_reward_lamports;

    if amount == 0 {
        return Ok(());
    }

    let venue_info = ctx.accounts.venue.to_account_info();
    let rent_exempt_minimum = Rent::get()?.minimum_balance(venue_info.data_len());

    if hook_config.can_pay_finalizer_reward(venue_info.lamports(), rent_exempt_minimum) {
        pay_finalizer_reward(
            &venue_info,
            &ctx.accounts.finalizer.to_account_info(),
            amount,
        )?;

        emit!(FinalizerRewardPaid {
            venue: venue_key,
            finalizer: ctx.accounts.finalizer.key(),
            amount,
        });
    } else {
        emit!(FinalizerRewardSkipped {
            venue: venue_key,
            finalizer: ctx.accounts.finalizer.key(),
            amount,
        });
    }

    Ok(())
}
