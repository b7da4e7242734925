use crate::events::LedgerUpdated;
use crate::state::LedgerConfig;
use anchor_lang::prelude::*;
use shared::constants::LEDGER_CONFIG_SEEDS;

/// Update the ledger roles.
/// Admin only.
///
/// # Arguments
/// * `admin` - The admin account (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct UpdateLedger<'info> {
    pub admin: Signer<'info>,

    #[account(mut,
        seeds = [LEDGER_CONFIG_SEEDS],
        bump = ledger_config.bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
}

pub fn handler(
    ctx: Context<UpdateLedger>,
    new_admin: Option<Pubkey>,
    new_settlement_authority: Option<Pubkey>,
) -> Result<()> {
    let ledger_config = &mut ctx.accounts.ledger_config;

    ledger_config.validate_admin(&ctx.accounts.admin.key())?;

    ledger_config.update(new_admin, new_settlement_authority);

    emit!(LedgerUpdated {
        admin: ledger_config.admin,
        settlement_authority: ledger_config.settlement_authority,
    });

    Ok(())
}
