use anchor_lang::prelude::*;

/// Event emitted when the ledger is initialized.
#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub settlement_authority: Pubkey,
}

/// Event emitted when the ledger roles are updated.
#[event]
pub struct LedgerUpdated {
    pub admin: Pubkey,
    pub settlement_authority: Pubkey,
}

/// Event emitted when a new asset is tracked by the ledger.
#[event]
pub struct ReserveInitialized {
    pub mint: Pubkey,
}

/// Event emitted when funds are deposited into a reserve.
///
/// # Arguments
/// * `mint` - The asset of the reserve.
/// * `depositor` - Who deposited.
/// * `amount` - The deposited amount.
/// * `balance` - The reserve balance after the deposit.
#[event]
pub struct Deposited {
    pub mint: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when a penalty is credited to a reserve.
#[event]
pub struct PenaltyCredited {
    pub mint: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when a bonus is paid out of a reserve.
#[event]
pub struct BonusDebited {
    pub mint: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when the admin withdraws funds from a reserve.
#[event]
pub struct EmergencyWithdrawal {
    pub mint: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when a spender is approved on a vault.
#[event]
pub struct SpenderApproved {
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub amount: u64,
}
