use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionEndReason {
    /// A trade completed while the discount was strictly positive.
    Favorable,

    /// A trade completed after the duration elapsed without the discount turning favorable.
    Expired,

    /// Ended by the admin.
    Manual,
}
