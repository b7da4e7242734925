use crate::state::LedgerConfig;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

impl LedgerConfig {
    /// Set every field of a freshly created ledger config.
    ///
    /// # Arguments
    /// * `bump` - The bump of the ledger config PDA.
    /// * `admin` - The admin of the ledger.
    /// * `settlement_authority` - The only signer allowed to credit penalties and pay bonuses.
    pub fn init(&mut self, bump: u8, admin: Pubkey, settlement_authority: Pubkey) {
        self.bump = bump;
        self.admin = admin;
        self.settlement_authority = settlement_authority;
    }

    /// Update the roles, keeping the ones that are not provided.
    pub fn update(&mut self, new_admin: Option<Pubkey>, new_settlement_authority: Option<Pubkey>) {
        if let Some(new_admin) = new_admin {
            self.admin = new_admin;
        }

        if let Some(new_settlement_authority) = new_settlement_authority {
            self.settlement_authority = new_settlement_authority;
        }
    }

    /// Validate that the signer is the admin of the ledger.
    pub fn validate_admin(&self, signer: &Pubkey) -> Result<()> {
        check_condition!(self.admin == *signer, Unauthorized);

        Ok(())
    }

    /// Validate that the signer is the settlement authority of the ledger.
    pub fn validate_settlement_authority(&self, signer: &Pubkey) -> Result<()> {
        check_condition!(self.settlement_authority == *signer, Unauthorized);

        Ok(())
    }
}
