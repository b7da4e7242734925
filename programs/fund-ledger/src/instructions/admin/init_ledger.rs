use crate::events::LedgerInitialized;
use crate::state::LedgerConfig;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::common::ADMIN;
use shared::constants::LEDGER_CONFIG_SEEDS;
use shared::errors::ErrorCode;

/// Initialize the ledger config.
/// Bootstrap admin only.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `admin` - The admin account (mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (init, not signer).
#[derive(Accounts)]
pub struct InitLedger<'info> {
    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = LedgerConfig::SIZE,
        seeds = [LEDGER_CONFIG_SEEDS],
        bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
}

impl InitLedger<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Admin is the bootstrap admin.
    pub fn validate(&self) -> Result<()> {
        check_condition!(self.admin.key() == ADMIN, Unauthorized);

        Ok(())
    }
}

/// Initialize the ledger config.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `settlement_authority` - The discount hook's signer PDA.
pub fn handler(ctx: Context<InitLedger>, settlement_authority: Pubkey) -> Result<()> {
    ctx.accounts.validate()?;

    let admin = ctx.accounts.admin.key();
    let ledger_config = &mut ctx.accounts.ledger_config;

    ledger_config.init(ctx.bumps.ledger_config, admin, settlement_authority);

    emit!(LedgerInitialized {
        admin,
        settlement_authority,
    });

    Ok(())
}
