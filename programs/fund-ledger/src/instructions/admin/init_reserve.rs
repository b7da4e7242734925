use crate::events::ReserveInitialized;
use crate::state::{LedgerConfig, Reserve};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use shared::constants::{LEDGER_CONFIG_SEEDS, RESERVE_SEEDS};

/// Track a new asset in the ledger.
/// Admin only.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `token_program` - The token program of the mint.
/// * `associated_token_program` - The associated token program.
/// * `admin` - The admin account (mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `mint` - The asset mint (not mut, not signer).
/// * `reserve` - The reserve account (PDA) (init, not signer).
/// * `vault` - The vault token account, owned by the ledger config (init if needed, not signer).
#[derive(Accounts)]
pub struct InitReserve<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [LEDGER_CONFIG_SEEDS],
        bump = ledger_config.bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account()]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        space = Reserve::SIZE,
        seeds = [RESERVE_SEEDS, mint.key().as_ref()],
        bump
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = ledger_config,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,
}

pub fn handler(ctx: Context<InitReserve>) -> Result<()> {
    ctx.accounts
        .ledger_config
        .validate_admin(&ctx.accounts.admin.key())?;

    let mint = ctx.accounts.mint.key();

    ctx.accounts.reserve.init(ctx.bumps.reserve, mint);

    emit!(ReserveInitialized { mint });

    Ok(())
}
