use crate::events::BonusDebited;
use crate::state::{LedgerConfig, Reserve};
use anchor_lang::prelude::*;
use shared::constants::{LEDGER_CONFIG_SEEDS, RESERVE_SEEDS};

/// Consume reserve funds for a bonus.
/// Settlement authority only (the discount hook's signer PDA, via CPI).
///
/// The tokens leave the vault through the trade engine, which was approved as a spender.
///
/// # Arguments
/// * `settlement_authority` - The settlement authority (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `reserve` - The reserve account of the bonus asset (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct PayBonus<'info> {
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

pub fn handler(ctx: Context<PayBonus>, amount: u64) -> Result<()> {
    ctx.accounts
        .ledger_config
        .validate_settlement_authority(&ctx.accounts.settlement_authority.key())?;

    let reserve = &mut ctx.accounts.reserve;

    reserve.pay_bonus(amount)?;

    emit!(BonusDebited {
        mint: reserve.mint,
        amount,
        balance: reserve.balance,
    });

    Ok(())
}
