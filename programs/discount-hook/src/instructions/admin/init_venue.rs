use crate::events::VenueInitialized;
use crate::state::{EvaluationQueue, HookConfig, Venue};
use crate::utils::{AuctionConfig, DiscountMode, Role};
use anchor_lang::prelude::*;
use shared::constants::{EVALUATION_QUEUE_SEEDS, HOOK_CONFIG_SEEDS, VENUE_SEEDS};

/// Initialize a venue and its evaluation queue.
/// Admin only.
///
/// # Arguments
/// * `system_program` - The system program.
/// * `admin` - The admin account (mut, signer).
/// * `hook_config` - The hook config account (PDA) (not mut, not signer).
/// * `venue` - The venue account (PDA) (init, not signer).
/// * `evaluation_queue` - The evaluation queue account (PDA) (init, not signer).
#[derive(Accounts)]
#[instruction(venue_id: [u8; 32])]
pub struct InitVenue<'info> {
    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [HOOK_CONFIG_SEEDS],
        bump = hook_config.bump
    )]
    pub hook_config: Account<'info, HookConfig>,

    #[account(
        init,
        payer = admin,
        space = Venue::SIZE,
        seeds = [VENUE_SEEDS, venue_id.as_ref()],
        bump
    )]
    pub venue: Box<Account<'info, Venue>>,

    #[account(
        init,
        payer = admin,
        space = EvaluationQueue::SIZE,
        seeds = [EVALUATION_QUEUE_SEEDS, venue.key().as_ref()],
        bump
    )]
    pub evaluation_queue: AccountLoader<'info, EvaluationQueue>,
}

impl InitVenue<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Admin holds the admin role.
    pub fn validate(&self) -> Result<()> {
        self.hook_config
            .validate_role(&self.admin.key(), Role::Admin)?;

        Ok(())
    }
}

/// Initialize a venue.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `venue_id` - The identifier of the venue.
/// * `mode` - The schedule of the venue.
/// * `asset_0` - The first asset of the pair.
/// * `asset_1` - The second asset of the pair.
/// * `default_config` - The config used by cycles started without one.
pub fn handler(
    ctx: Context<InitVenue>,
    venue_id: [u8; 32],
    mode: DiscountMode,
    asset_0: Pubkey,
    asset_1: Pubkey,
    default_config: AuctionConfig,
) -> Result<()> {
    ctx.accounts.validate()?;

    let venue_key = ctx.accounts.venue.key();

    let evaluation_queue = &mut ctx.accounts.evaluation_queue.load_init()?;
    evaluation_queue.bump = ctx.bumps.evaluation_queue;
    evaluation_queue.venue = venue_key;

    let venue = &mut ctx.accounts.venue;
    venue.init(
        ctx.bumps.venue,
        venue_id,
        mode,
        asset_0,
        asset_1,
        default_config,
    )?;

    emit!(VenueInitialized {
        venue: venue_key,
        venue_id,
        mode,
        asset_0,
        asset_1,
    });

    Ok(())
}
