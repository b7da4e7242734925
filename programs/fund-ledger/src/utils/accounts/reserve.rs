use crate::state::Reserve;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

impl Reserve {
    /// Set the identity of a freshly created reserve.
    pub fn init(&mut self, bump: u8, mint: Pubkey) {
        self.bump = bump;
        self.mint = mint;
    }

    /// Funds available for bonuses and withdrawals.
    pub fn available(&self) -> u64 {
        self.balance
    }

    pub fn has_at_least(&self, amount: u64) -> bool {
        self.balance >= amount
    }

    /// Credit a deposit. The tokens were transferred into the vault by the caller.
    ///
    /// # Arguments
    /// * `amount` - The amount deposited.
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        self.credit(amount)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    /// Credit a penalty. No transfer happens here, the trade engine settles the tokens
    /// into the vault as part of the trade.
    ///
    /// # Arguments
    /// * `amount` - The penalty amount.
    pub fn collect_penalty(&mut self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        self.credit(amount)?;
        self.total_penalties = self
            .total_penalties
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    /// Consume reserve funds for a bonus. The settlement path checks sufficiency before calling,
    /// this check still guards the balance.
    ///
    /// # Arguments
    /// * `amount` - The bonus amount.
    pub fn pay_bonus(&mut self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        self.debit(amount)?;
        self.total_bonuses = self
            .total_bonuses
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    /// Debit an administrative withdrawal.
    ///
    /// # Arguments
    /// * `amount` - The amount withdrawn.
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        check_condition!(amount > 0, InvalidAmount);

        self.debit(amount)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    fn debit(&mut self, amount: u64) -> Result<()> {
        check_condition!(self.has_at_least(amount), InsufficientReserve);

        self.balance -= amount;

        Ok(())
    }
}
