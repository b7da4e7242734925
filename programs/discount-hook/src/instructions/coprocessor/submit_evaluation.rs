use crate::events::EvaluationSubmitted;
use crate::state::{EvaluationQueue, HookConfig, Venue};
use crate::utils::Role;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};
use shared::errors::ErrorCode;

/// Fulfill an evaluation request.
/// Coprocessor only.
///
/// # Arguments
/// * `coprocessor` - The coprocessor account (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (not mut, not signer).
/// * `evaluation_queue` - The evaluation queue of the venue (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct SubmitEvaluation<'info> {
    pub coprocessor: Signer<'info>,

    #[account(
        seeds = [HOOK_CONFIG_SEEDS],
        bump = hook_config.bump
    )]
    pub hook_config: Account<'info, HookConfig>,

    #[account(
        seeds = [VENUE_SEEDS, venue.venue_id.as_ref()],
        bump = venue.bump
    )]
    pub venue: Box<Account<'info, Venue>>,

    #[account(mut)]
    pub evaluation_queue: AccountLoader<'info, EvaluationQueue>,
}

/// Store the evaluated discount of a request. It is only committed to the venue by the next
/// finalization of its bucket.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `handle` - The handle of the request.
/// * `context` - The cycle context the coprocessor evaluated.
/// * `result_bp` - The evaluated discount.
pub fn handler(
    ctx: Context<SubmitEvaluation>,
    handle: u64,
    context: [u8; 32],
    result_bp: i64,
) -> Result<()> {
    ctx.accounts
        .hook_config
        .validate_role(&ctx.accounts.coprocessor.key(), Role::Coprocessor)?;

    let venue_key = ctx.accounts.venue.key();

    let evaluation_queue = &mut ctx.accounts.evaluation_queue.load_mut()?;
    check_condition!(
        evaluation_queue.venue == venue_key,
        InvalidEvaluationQueue
    );

    evaluation_queue.submit(handle, context, result_bp)?;

    emit!(EvaluationSubmitted {
        venue: venue_key,
        handle,
        result_bp,
    });

    Ok(())
}
