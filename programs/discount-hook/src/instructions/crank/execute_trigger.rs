use crate::events::ExecutionTriggered;
use crate::state::{HookConfig, Venue};
use crate::utils::{call_executor, execute_batch_discriminator};
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{HOOK_CONFIG_SEEDS, VENUE_SEEDS};
use shared::errors::ErrorCode;

/// Call the executor after a favorable cycle.
/// Permissionless.
///
/// # Arguments
/// * `caller` - The caller (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
///
/// Remaining accounts: the executor program, then the accounts of its `execute_batch` instruction.
#[derive(Accounts)]
pub struct ExecuteTrigger<'info> {
    pub caller: Signer<'info>,

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

impl ExecuteTrigger<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * An execution is pending for the venue.
    /// * An executor is registered.
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.venue.pending_execution, NoPendingExecution);
        check_condition!(self.hook_config.has_executor(), InvalidCallbackProgram);

        Ok(())
    }
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, ExecuteTrigger<'info>>) -> Result<()> {
    ctx.accounts.validate()?;

    let executor_program = ctx.accounts.hook_config.executor_program;
    let venue_key = ctx.accounts.venue.key();

    ctx.accounts.venue.pending_execution = false;

    call_executor(
        &executor_program,
        ctx.remaining_accounts,
        execute_batch_discriminator().to_vec(),
    )?;

    emit!(ExecutionTriggered {
        venue: venue_key,
        executor_program,
    });

    Ok(())
}
