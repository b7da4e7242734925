use crate::events::EmergencyWithdrawal;
use crate::state::{LedgerConfig, Reserve};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::constants::{LEDGER_CONFIG_SEEDS, RESERVE_SEEDS};

/// Withdraw funds from a reserve.
/// Admin only.
///
/// # Arguments
/// * `token_program` - The token program of the mint.
/// * `admin` - The admin account (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `mint` - The asset mint (not mut, not signer).
/// * `reserve` - The reserve account (PDA) (mut, not signer).
/// * `vault` - The vault token account (mut, not signer).
/// * `admin_token_account` - The admin's token account receiving the funds (mut, not signer).
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub token_program: Interface<'info, TokenInterface>,

    pub admin: Signer<'info>,

    #[account(
        seeds = [LEDGER_CONFIG_SEEDS],
        bump = ledger_config.bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account()]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut,
        seeds = [RESERVE_SEEDS, mint.key().as_ref()],
        bump = reserve.bump
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(mut,
        associated_token::mint = mint,
        associated_token::authority = ledger_config,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut,
        token::mint = mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

/// Withdraw funds from a reserve. The reserve is debited before the transfer, so an amount
/// above the balance is rejected without moving any tokens.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `amount` - The amount to withdraw.
pub fn handler(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    ctx.accounts
        .ledger_config
        .validate_admin(&ctx.accounts.admin.key())?;

    let reserve = &mut ctx.accounts.reserve;
    reserve.withdraw(amount)?;
    let balance = reserve.balance;

    let signer_seeds = &[LEDGER_CONFIG_SEEDS, &[ctx.accounts.ledger_config.bump]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.ledger_config.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
            &[signer_seeds],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(EmergencyWithdrawal {
        mint: ctx.accounts.mint.key(),
        amount,
        balance,
    });

    Ok(())
}
