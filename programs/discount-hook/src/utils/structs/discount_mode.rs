use anchor_lang::prelude::*;

/// Which schedule drives the discount of a venue.
///
/// Both expose the same surface (start, update and read, end); the bucketed schedule is the
/// default as its randomization can't be predicted by bots timing their entry.
#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq, InitSpace,
)]
pub enum DiscountMode {
    /// Discount evaluated per time bucket from hidden parameters, through the coprocessor.
    #[default]
    Bucketed,

    /// Public linear decay, a pure function of the elapsed time.
    Linear,
}
