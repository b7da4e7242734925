use anchor_lang::prelude::*;

/// Ledger config tracks who may mutate the reserves.
///
/// The admin tops up, withdraws and approves spenders. The settlement authority is the
/// discount hook's signer PDA, the only caller allowed to credit penalties and consume bonuses.
///
/// PDA Seeds ["ledger_config"]
#[account]
#[derive(Default, InitSpace)]
pub struct LedgerConfig {
    pub bump: u8,

    pub admin: Pubkey,

    pub settlement_authority: Pubkey,
}

impl LedgerConfig {
    pub const SIZE: usize = 8 + LedgerConfig::INIT_SPACE;
}

/// Reserve of a single asset. The tokens themselves sit in the vault, the associated token
/// account of the ledger config for the mint.
///
/// The balance is never allowed to go negative, every debit checks sufficiency first.
///
/// PDA Seeds ["reserve", mint pubkey]
#[account]
#[derive(Default, InitSpace)]
pub struct Reserve {
    pub bump: u8,

    pub mint: Pubkey,

    /// Funds available for bonuses
    pub balance: u64,

    pub total_deposited: u64,

    pub total_penalties: u64,

    pub total_bonuses: u64,

    pub total_withdrawn: u64,
}

impl Reserve {
    pub const SIZE: usize = 8 + Reserve::INIT_SPACE;
}
