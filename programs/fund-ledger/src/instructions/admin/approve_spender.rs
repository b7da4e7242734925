use crate::events::SpenderApproved;
use crate::state::LedgerConfig;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Approve, Mint, TokenAccount, TokenInterface};
use shared::constants::LEDGER_CONFIG_SEEDS;

/// Approve a delegate on a vault, so the trade engine can pull bonus funds while settling a trade.
/// Admin only.
///
/// # Arguments
/// * `token_program` - The token program of the mint.
/// * `admin` - The admin account (not mut, signer).
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `mint` - The asset mint (not mut, not signer).
/// * `vault` - The vault token account (mut, not signer).
/// * `delegate` - The account allowed to move vault funds (not mut, not signer).
#[derive(Accounts)]
pub struct ApproveSpender<'info> {
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
        associated_token::mint = mint,
        associated_token::authority = ledger_config,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Any account can be a delegate, the admin chooses it.
    #[account()]
    pub delegate: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
    ctx.accounts
        .ledger_config
        .validate_admin(&ctx.accounts.admin.key())?;

    let signer_seeds = &[LEDGER_CONFIG_SEEDS, &[ctx.accounts.ledger_config.bump]];

    token_interface::approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.vault.to_account_info(),
                delegate: ctx.accounts.delegate.to_account_info(),
                authority: ctx.accounts.ledger_config.to_account_info(),
            },
            &[signer_seeds],
        ),
        amount,
    )?;

    emit!(SpenderApproved {
        mint: ctx.accounts.mint.key(),
        delegate: ctx.accounts.delegate.key(),
        amount,
    });

    Ok(())
}
