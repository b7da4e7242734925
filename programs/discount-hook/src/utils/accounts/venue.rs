use crate::state::Venue;
use crate::utils::{
    AuctionConfig, AuctionEndReason, AuctionState, DiscountMode, DiscountUpdate,
    EncryptedEvaluator, FinalizeOutcome, Settlement, SwapAssets, TradeQuote,
};
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::MAX_BUCKETS;
use shared::errors::ErrorCode;

impl Venue {
    /// Set the identity and default config of a freshly created venue.
    ///
    /// # Arguments
    /// * `bump` - The bump of the venue PDA.
    /// * `venue_id` - The identifier of the venue.
    /// * `mode` - The schedule used by the venue.
    /// * `asset_0` - The first asset of the pair.
    /// * `asset_1` - The second asset of the pair.
    /// * `default_config` - The config used when a cycle starts without one.
    pub fn init(
        &mut self,
        bump: u8,
        venue_id: [u8; 32],
        mode: DiscountMode,
        asset_0: Pubkey,
        asset_1: Pubkey,
        default_config: AuctionConfig,
    ) -> Result<()> {
        check_condition!(asset_0 != asset_1, InvalidVenueAsset);
        default_config.validate(mode)?;

        self.bump = bump;
        self.venue_id = venue_id;
        self.mode = mode;
        self.asset_0 = asset_0;
        self.asset_1 = asset_1;
        self.default_config = default_config;

        Ok(())
    }

    /// Change the mode and default config. Only while no cycle is running, so that a running
    /// cycle keeps the config it started with.
    pub fn set_default_config(&mut self, mode: DiscountMode, config: AuctionConfig) -> Result<()> {
        check_condition!(!self.auction.active, AuctionAlreadyActive);
        config.validate(mode)?;

        self.mode = mode;
        self.default_config = config;

        Ok(())
    }

    /// Store the encrypted params of the next cycle. Only while no cycle is running.
    pub fn set_encrypted_params(
        &mut self,
        encrypted_tau: [u8; 32],
        encrypted_eps: [u8; 32],
    ) -> Result<()> {
        check_condition!(!self.auction.active, AuctionAlreadyActive);

        self.encrypted_params.encrypted_tau = encrypted_tau;
        self.encrypted_params.encrypted_eps = encrypted_eps;
        self.encrypted_params.armed = true;

        Ok(())
    }

    /// Whether a trade at `current_time` starts a new cycle on its own.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    /// * `auction_interval` - The minimum time between two cycles, scaled in seconds.
    pub fn can_auto_start(&self, current_time: u64, auction_interval: u64) -> bool {
        if self.auction.active {
            return false;
        }

        let next_start = self
            .auction
            .last_execution_time
            .saturating_add(auction_interval);

        current_time >= next_start
            && (self.mode == DiscountMode::Linear || self.encrypted_params.armed)
    }

    /// Start a cycle.
    ///
    /// Bucketed venues consume their armed encrypted params and request the evaluation of the
    /// first buckets right away.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    /// * `config` - The config of the cycle, the default config if None.
    /// * `evaluator` - The evaluator, required by bucketed venues.
    pub fn start_auction(
        &mut self,
        current_time: u64,
        config: Option<AuctionConfig>,
        evaluator: Option<&mut dyn EncryptedEvaluator>,
    ) -> Result<()> {
        check_condition!(!self.auction.active, AuctionAlreadyActive);

        let config = config.unwrap_or(self.default_config);
        config.validate(self.mode)?;

        if self.mode == DiscountMode::Bucketed {
            check_condition!(self.encrypted_params.armed, EncryptedParamsNotSet);
            check_condition!(evaluator.is_some(), MissingEvaluationQueue);
        }

        self.auction = AuctionState {
            active: true,
            start_time: current_time,
            last_execution_time: self.auction.last_execution_time,
            last_discount_bp: config.start_discount_bp,
            last_updated_bucket: 0,
            committed_buckets: 0,
            config,
        };
        self.bucket_handles = [0; MAX_BUCKETS];

        match self.mode {
            DiscountMode::Linear => Ok(()),
            DiscountMode::Bucketed => {
                let evaluator = evaluator.ok_or(ErrorCode::MissingEvaluationQueue)?;

                self.encrypted_params.armed = false;
                self.prime_buckets(0, evaluator)
            }
        }
    }

    /// Advance the schedule to `current_time` and return the discount to apply.
    ///
    /// Linear venues compute it directly. Bucketed venues finalize the current bucket if its
    /// evaluation is ready and return the last committed value, along with what finalizing did.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    /// * `evaluator` - The evaluator, required by running bucketed venues.
    pub fn update_and_get(
        &mut self,
        current_time: u64,
        evaluator: Option<&mut dyn EncryptedEvaluator>,
    ) -> Result<DiscountUpdate> {
        if !self.auction.active {
            return Ok(DiscountUpdate {
                discount_bp: 0,
                outcome: FinalizeOutcome::Idle,
            });
        }

        let outcome = match self.mode {
            DiscountMode::Linear => {
                let discount = self.auction.linear_discount(current_time);
                self.auction.last_discount_bp = discount.max(self.auction.last_discount_bp);

                FinalizeOutcome::Idle
            }
            DiscountMode::Bucketed => {
                let evaluator = evaluator.ok_or(ErrorCode::MissingEvaluationQueue)?;

                self.finalize_current_bucket(current_time, evaluator)?
            }
        };

        Ok(DiscountUpdate {
            discount_bp: self.auction.last_discount_bp,
            outcome,
        })
    }

    /// Prepare a trade: start a cycle if one is due, advance the schedule, then settle the
    /// trade at the resulting discount against the reserve of the unspecified asset.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    /// * `auction_interval` - The minimum time between two cycles, scaled in seconds.
    /// * `amount_specified` - The signed magnitude of the trade, negative for an exact input.
    /// * `bonus_available` - The balance of the reserve a bonus would be paid from.
    /// * `evaluator` - The evaluator, required by bucketed venues.
    pub fn prepare_trade(
        &mut self,
        current_time: u64,
        auction_interval: u64,
        amount_specified: i64,
        bonus_available: u64,
        mut evaluator: Option<&mut dyn EncryptedEvaluator>,
    ) -> Result<TradeQuote> {
        let started = self.can_auto_start(current_time, auction_interval);

        if started {
            self.start_auction(
                current_time,
                None,
                evaluator
                    .as_mut()
                    .map(|evaluator| &mut **evaluator as &mut dyn EncryptedEvaluator),
            )?;
        }

        let update = self.update_and_get(current_time, evaluator)?;
        let settlement = Settlement::compute(amount_specified, update.discount_bp, bonus_available)?;

        Ok(TradeQuote {
            started,
            update,
            settlement,
        })
    }

    /// Read the discount without changing anything.
    ///
    /// Bucketed venues return the last committed value.
    pub fn current_discount(&self, current_time: u64) -> i64 {
        if !self.auction.active {
            return 0;
        }

        match self.mode {
            DiscountMode::Linear => self.auction.linear_discount(current_time),
            DiscountMode::Bucketed => self.auction.last_discount_bp,
        }
    }

    /// Why a trade completing at `current_time` with `discount_bp` ends the cycle, if it does.
    ///
    /// A favorable trade (strictly positive discount) always ends it. Otherwise the cycle
    /// ends once its duration elapsed.
    pub fn end_reason_after_trade(
        &self,
        current_time: u64,
        discount_bp: i64,
    ) -> Option<AuctionEndReason> {
        if !self.auction.active {
            None
        } else if discount_bp > 0 {
            Some(AuctionEndReason::Favorable)
        } else if self.auction.is_expired(current_time) {
            Some(AuctionEndReason::Expired)
        } else {
            None
        }
    }

    /// End the cycle if the completed trade calls for it, and schedule the executor when a
    /// favorable trade ended it and one is registered.
    ///
    /// # Arguments
    /// * `current_time` - The current time, scaled in seconds.
    /// * `discount_bp` - The discount the trade settled at.
    /// * `has_executor` - Whether an executor program is registered.
    pub fn settle_after_trade(
        &mut self,
        current_time: u64,
        discount_bp: i64,
        has_executor: bool,
    ) -> Result<Option<AuctionEndReason>> {
        let Some(reason) = self.end_reason_after_trade(current_time, discount_bp) else {
            return Ok(None);
        };

        self.end_auction(current_time)?;

        if reason == AuctionEndReason::Favorable && has_executor {
            self.pending_execution = true;
        }

        Ok(Some(reason))
    }

    /// End the running cycle. The next automatic start is gated from `current_time`.
    pub fn end_auction(&mut self, current_time: u64) -> Result<()> {
        check_condition!(self.auction.active, AuctionNotActive);

        self.auction.active = false;
        self.auction.last_execution_time = current_time;

        Ok(())
    }

    /// Assets of a trade on this venue.
    pub fn swap_assets(&self, zero_for_one: bool, amount_specified: i64) -> SwapAssets {
        SwapAssets::resolve(self.asset_0, self.asset_1, zero_for_one, amount_specified)
    }

    /// Finalize the current bucket. Linear venues have nothing to finalize.
    pub fn finalize_current_bucket(
        &mut self,
        current_time: u64,
        evaluator: &mut dyn EncryptedEvaluator,
    ) -> Result<FinalizeOutcome> {
        match self.mode {
            DiscountMode::Linear => Ok(FinalizeOutcome::Idle),
            DiscountMode::Bucketed => self.finalize_bucket(current_time, evaluator),
        }
    }
}
