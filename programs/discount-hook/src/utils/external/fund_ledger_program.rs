use crate::state::HookSigner;
use anchor_lang::prelude::*;
use fund_ledger::state::{LedgerConfig, Reserve};
use shared::constants::HOOK_SIGNER_SEEDS;

pub struct FundLedgerProgram {}

impl FundLedgerProgram {
    /// Credit a penalty to a reserve, signed by the hook signer PDA.
    ///
    /// # Arguments
    /// * `fund_ledger_program` - The fund ledger program.
    /// * `hook_signer` - The hook signer account (PDA).
    /// * `ledger_config` - The ledger config account (PDA).
    /// * `reserve` - The reserve of the penalty asset.
    /// * `amount` - The penalty amount.
    #[cfg(not(tarpaulin_include))]
    pub fn collect_penalty<'info>(
        fund_ledger_program: &AccountInfo<'info>,
        hook_signer: &Account<'info, HookSigner>,
        ledger_config: &Account<'info, LedgerConfig>,
        reserve: &Account<'info, Reserve>,
        amount: u64,
    ) -> Result<()> {
        let bump = hook_signer.bump;
        let signer_seeds = &[HOOK_SIGNER_SEEDS, &[bump]];

        let cpi_accounts = fund_ledger::cpi::accounts::CollectPenalty {
            settlement_authority: hook_signer.to_account_info(),
            ledger_config: ledger_config.to_account_info(),
            reserve: reserve.to_account_info(),
        };

        fund_ledger::cpi::collect_penalty(
            CpiContext::new_with_signer(
                fund_ledger_program.clone(),
                cpi_accounts,
                &[signer_seeds],
            ),
            amount,
        )
    }

    /// Consume reserve funds for a bonus, signed by the hook signer PDA.
    ///
    /// # Arguments
    /// * `fund_ledger_program` - The fund ledger program.
    /// * `hook_signer` - The hook signer account (PDA).
    /// * `ledger_config` - The ledger config account (PDA).
    /// * `reserve` - The reserve of the bonus asset.
    /// * `amount` - The bonus amount.
    #[cfg(not(tarpaulin_include))]
    pub fn pay_bonus<'info>(
        fund_ledger_program: &AccountInfo<'info>,
        hook_signer: &Account<'info, HookSigner>,
        ledger_config: &Account<'info, LedgerConfig>,
        reserve: &Account<'info, Reserve>,
        amount: u64,
    ) -> Result<()> {
        let bump = hook_signer.bump;
        let signer_seeds = &[HOOK_SIGNER_SEEDS, &[bump]];

        let cpi_accounts = fund_ledger::cpi::accounts::PayBonus {
            settlement_authority: hook_signer.to_account_info(),
            ledger_config: ledger_config.to_account_info(),
            reserve: reserve.to_account_info(),
        };

        fund_ledger::cpi::pay_bonus(
            CpiContext::new_with_signer(
                fund_ledger_program.clone(),
                cpi_accounts,
                &[signer_seeds],
            ),
            amount,
        )
    }
}
