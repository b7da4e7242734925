use crate::events::PenaltyCredited;
use crate::state::{LedgerConfig, Reserve};
use anchor_lang::prelude::*;
use shared::constants::{LEDGER_CONFIG_SEEDS, RESERVE_SEEDS};

/// Credit a penalty to a reserve.
/// Settlement authority only (the discount hook's signer PDA, via CPI).
///
/// # Arguments
/// * `settlement_authority` - The settlement authority (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `reserve` - The reserve account of the penalized asset (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct CollectPenalty<'info> {
    pub settlement_authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_CONFIG_SEEDS],
        bump = ledger_config.bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut,
        seeds = [RESERVE_SEEDS, reserve.mint.as_ref()],
        bump = reserve.bump
    )]
    pub reserve: Account<'info, Reserve>,
}

pub fn handler(ctx: Context<CollectPenalty>, amount: u64) -> Result<()> {
    ctx.accounts
        .ledger_config
        .validate_settlement_authority(&ctx.accounts.settlement_authority.key())?;

    let reserve = &mut ctx.accounts.reserve;

    reserve.collect_penalty(amount)?;

    emit!(PenaltyCredited {
        mint: reserve.mint,
        amount,
        balance: reserve.balance,
    });

    Ok(())
}
