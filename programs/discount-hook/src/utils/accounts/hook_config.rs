use crate::state::HookConfig;
use crate::utils::Role;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

impl HookConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        bump: u8,
        admin: Pubkey,
        engine_authority: Pubkey,
        coprocessor: Pubkey,
        executor_program: Pubkey,
        auction_interval: u64,
        finalizer_reward_lamports: u64,
    ) {
        self.bump = bump;
        self.admin = admin;
        self.engine_authority = engine_authority;
        self.coprocessor = coprocessor;
        self.executor_program = executor_program;
        self.auction_interval = auction_interval;
        self.finalizer_reward_lamports = finalizer_reward_lamports;
    }

    /// Update the fields that are provided, keep the others.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        new_admin: Option<Pubkey>,
        engine_authority: Option<Pubkey>,
        coprocessor: Option<Pubkey>,
        executor_program: Option<Pubkey>,
        auction_interval: Option<u64>,
        finalizer_reward_lamports: Option<u64>,
    ) {
        if let Some(new_admin) = new_admin {
            self.admin = new_admin;
        }
        if let Some(engine_authority) = engine_authority {
            self.engine_authority = engine_authority;
        }
        if let Some(coprocessor) = coprocessor {
            self.coprocessor = coprocessor;
        }
        if let Some(executor_program) = executor_program {
            self.executor_program = executor_program;
        }
        if let Some(auction_interval) = auction_interval {
            self.auction_interval = auction_interval;
        }
        if let Some(finalizer_reward_lamports) = finalizer_reward_lamports {
            self.finalizer_reward_lamports = finalizer_reward_lamports;
        }
    }

    /// Validate the signer holds the given role.
    ///
    /// # Arguments
    /// * `signer` - The signer of the instruction.
    /// * `role` - The role required.
    pub fn validate_role(&self, signer: &Pubkey, role: Role) -> Result<()> {
        let expected = match role {
            Role::Admin => &self.admin,
            Role::Engine => &self.engine_authority,
            Role::Coprocessor => &self.coprocessor,
        };

        check_condition!(expected == signer, Unauthorized);

        Ok(())
    }

    pub fn has_executor(&self) -> bool {
        self.executor_program != Pubkey::default()
    }

    /// Whether the finalizer reward can be paid from an account holding `balance` lamports,
    /// without dropping below `rent_exempt_minimum`.
    pub fn can_pay_finalizer_reward(&self, balance: u64, rent_exempt_minimum: u64) -> bool {
        self.finalizer_reward_lamports > 0
            && balance.saturating_sub(rent_exempt_minimum) >= self.finalizer_reward_lamports
    }
}
