//! Fund Ledger Program
//!
//! Bookkeeping of the per-asset reserves used to pay bonuses to patient traders. Reserves are
//! replenished by the penalties collected from early traders and by deposits.
//!
//! # Instructions
//!
//! * `init_ledger` - Initialize the ledger config (bootstrap admin only).
//! * `update_ledger` - Update the admin or the settlement authority.
//! * `init_reserve` - Track a new asset, creating its reserve and vault.
//! * `deposit` - Deposit funds into a reserve, callable by anyone.
//! * `collect_penalty` - Credit a penalty already settled by the trade engine (settlement authority only).
//! * `pay_bonus` - Consume reserve funds for a bonus (settlement authority only).
//! * `emergency_withdraw` - Withdraw funds from a reserve (admin only).
//! * `approve_spender` - Let a third party (the trade engine) pull vault funds (admin only).
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

use instructions::*;

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("4LdgrFnd8xQp2mZr7TvWcYbHsKjE5aNu3GkRtPw9XyBe");

#[program]
pub mod fund_ledger {

    use super::*;

    /*
    Admin functions
     */
    pub fn init_ledger(ctx: Context<InitLedger>, settlement_authority: Pubkey) -> Result<()> {
        init_ledger::handler(ctx, settlement_authority)
    }

    pub fn update_ledger(
        ctx: Context<UpdateLedger>,
        new_admin: Option<Pubkey>,
        new_settlement_authority: Option<Pubkey>,
    ) -> Result<()> {
        update_ledger::handler(ctx, new_admin, new_settlement_authority)
    }

    pub fn init_reserve(ctx: Context<InitReserve>) -> Result<()> {
        init_reserve::handler(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        emergency_withdraw::handler(ctx, amount)
    }

    pub fn approve_spender(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
        approve_spender::handler(ctx, amount)
    }

    /*
    User functions
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        deposit::handler(ctx, amount)
    }

    /*
    Settlement functions
     */
    pub fn collect_penalty(ctx: Context<CollectPenalty>, amount: u64) -> Result<()> {
        collect_penalty::handler(ctx, amount)
    }

    pub fn pay_bonus(ctx: Context<PayBonus>, amount: u64) -> Result<()> {
        pay_bonus::handler(ctx, amount)
    }
}
