use crate::events::{AuctionStarted, BonusApplied, BonusSkipped, PenaltyApplied};
use crate::state::{EvaluationQueue, HookConfig, HookSigner, Venue};
use crate::utils::{EncryptedEvaluator, FundLedgerProgram, Role, Settlement, SwapAdjustment};
use anchor_lang::prelude::*;
use fund_ledger::program::FundLedger;
use fund_ledger::state::{LedgerConfig, Reserve};
use shared::check_condition;
use shared::constants::{
    HOOK_CONFIG_SEEDS, HOOK_SIGNER_SEEDS, LEDGER_CONFIG_SEEDS, RESERVE_SEEDS, VENUE_SEEDS,
};
use shared::errors::ErrorCode;

/// Called by the trade engine before a trade executes.
/// Engine only.
///
/// # Arguments
/// * `engine_authority` - The trade engine authority (not mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `hook_signer` - The hook signer account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (mut, not signer).
/// * `evaluation_queue` - The evaluation queue of the venue (PDA) (mut, not signer), required by bucketed venues.
/// * `fund_ledger_program` - The fund ledger program.
/// * `ledger_config` - The ledger config account (PDA) (not mut, not signer).
/// * `specified_reserve` - The reserve of the specified asset of the trade (PDA) (mut, not signer).
/// * `unspecified_reserve` - The reserve of the unspecified asset of the trade (PDA) (mut, not signer).
#[derive(Accounts)]
pub struct BeforeSwap<'info> {
    pub engine_authority: Signer<'info>,

    #[account(
        seeds = [HOOK_CONFIG_SEEDS],
        bump = hook_config.bump
    )]
    pub hook_config: Account<'info, HookConfig>,

    #[account(
        seeds = [HOOK_SIGNER_SEEDS],
        bump = hook_signer.bump
    )]
    pub hook_signer: Account<'info, HookSigner>,

    #[account(mut,
        seeds = [VENUE_SEEDS, venue.venue_id.as_ref()],
        bump = venue.bump
    )]
    pub venue: Box<Account<'info, Venue>>,

    #[account(mut)]
    pub evaluation_queue: Option<AccountLoader<'info, EvaluationQueue>>,

    pub fund_ledger_program: Program<'info, FundLedger>,

    #[account(
        seeds = [LEDGER_CONFIG_SEEDS],
        bump = ledger_config.bump,
        seeds::program = fund_ledger::ID,
    )]
    pub ledger_config: Box<Account<'info, LedgerConfig>>,

    #[account(mut,
        seeds = [RESERVE_SEEDS, specified_reserve.mint.as_ref()],
        bump = specified_reserve.bump,
        seeds::program = fund_ledger::ID,
    )]
    pub specified_reserve: Box<Account<'info, Reserve>>,

    #[account(mut,
        seeds = [RESERVE_SEEDS, unspecified_reserve.mint.as_ref()],
        bump = unspecified_reserve.bump,
        seeds::program = fund_ledger::ID,
    )]
    pub unspecified_reserve: Box<Account<'info, Reserve>>,
}

impl BeforeSwap<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Signer is the engine authority.
    /// * The reserves match the specified and unspecified assets of the trade.
    pub fn validate(&self, zero_for_one: bool, amount_specified: i64) -> Result<()> {
        self.hook_config
            .validate_role(&self.engine_authority.key(), Role::Engine)?;

        let assets = self.venue.swap_assets(zero_for_one, amount_specified);

        check_condition!(
            self.specified_reserve.mint == assets.specified
                && self.unspecified_reserve.mint == assets.unspecified,
            InvalidReserve
        );

        Ok(())
    }
}

/// Start a cycle if one is due, advance the schedule and settle the trade against the ledger.
///
/// Negative discount: the penalty is taken on the specified asset and credited to its reserve.
/// Positive discount: the bonus is paid on the unspecified asset from its reserve, skipped if the
/// reserve can't cover it.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `zero_for_one` - Whether the trader sells asset 0 for asset 1.
/// * `amount_specified` - The signed magnitude of the trade, negative for an exact input.
///
/// Returns the adjustment the engine applies to the trade.
pub fn handler(
    ctx: Context<BeforeSwap>,
    zero_for_one: bool,
    amount_specified: i64,
) -> Result<SwapAdjustment> {
    ctx.accounts.validate(zero_for_one, amount_specified)?;

    let current_time = Clock::get()?.unix_timestamp as u64;
    let venue_key = ctx.accounts.venue.key();
    let auction_interval = ctx.accounts.hook_config.auction_interval;

    let mut evaluation_queue =
        EvaluationQueue::load_for_venue(&ctx.accounts.evaluation_queue, &venue_key)?;

    let bonus_available = ctx.accounts.unspecified_reserve.available();
    let venue = &mut ctx.accounts.venue;

    let quote = venue.prepare_trade(
        current_time,
        auction_interval,
        amount_specified,
        bonus_available,
        evaluation_queue
            .as_deref_mut()
            .map(|queue| queue as &mut dyn EncryptedEvaluator),
    )?;

    if quote.started {
        emit!(AuctionStarted {
            venue: venue_key,
            mode: venue.mode,
            start_time: current_time,
            config: venue.auction.config,
            context: venue.cycle_context(),
        });
    }

    quote.update.outcome.emit_transition(venue_key);

    let discount_bp = quote.update.discount_bp;
    let settlement = quote.settlement;

    match settlement {
        Settlement::Penalty { amount } => {
            FundLedgerProgram::collect_penalty(
                &ctx.accounts.fund_ledger_program.to_account_info(),
                &ctx.accounts.hook_signer,
                &ctx.accounts.ledger_config,
                &ctx.accounts.specified_reserve,
                amount,
            )?;

            emit!(PenaltyApplied {
                venue: venue_key,
                mint: ctx.accounts.specified_reserve.mint,
                amount,
                discount_bp,
            });
        }
        Settlement::Bonus { amount } => {
            FundLedgerProgram::pay_bonus(
                &ctx.accounts.fund_ledger_program.to_account_info(),
                &ctx.accounts.hook_signer,
                &ctx.accounts.ledger_config,
                &ctx.accounts.unspecified_reserve,
                amount,
            )?;

            emit!(BonusApplied {
                venue: venue_key,
                mint: ctx.accounts.unspecified_reserve.mint,
                amount,
                discount_bp,
            });
        }
        Settlement::BonusSkipped { amount, available } => {
            emit!(BonusSkipped {
                venue: venue_key,
                mint: ctx.accounts.unspecified_reserve.mint,
                amount,
                available,
            });
        }
        Settlement::None => {}
    }

    settlement.adjustment()
}
