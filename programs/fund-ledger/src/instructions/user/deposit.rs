use crate::events::Deposited;
use crate::state::{LedgerConfig, Reserve};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::constants::{LEDGER_CONFIG_SEEDS, RESERVE_SEEDS};

/// Deposit funds into a reserve.
/// Permissionless: used to bootstrap reserves, by the admin to top them up, and to return the
/// proceeds of externally triggered operations.
///
/// # Arguments
/// * `token_program` - The token program of the mint.
/// * `depositor` - The depositor account (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `mint` - The asset mint (not mut, not signer).
/// * `reserve` - The reserve account (PDA) (mut, not signer).
/// * `vault` - The vault token account (mut, not signer).
/// * `depositor_token_account` - The depositor's token account (mut, not signer).
#[derive(Accounts)]
pub struct Deposit<'info> {
    pub token_program: Interface<'info, TokenInterface>,

    pub depositor: Signer<'info>,

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
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

/// Pull `amount` from the depositor into the vault and credit the reserve.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `amount` - The amount to deposit.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    ctx.accounts.reserve.deposit(amount)?;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(Deposited {
        mint: ctx.accounts.mint.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        balance: ctx.accounts.reserve.balance,
    });

    Ok(())
}
