use anchor_lang::prelude::*;

/// Balancing adjustment returned to the trade engine by `before_swap`.
///
/// From the hook's point of view: positive means the hook takes from the trade, negative means
/// the hook contributes to it.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAdjustment {
    /// Delta on the specified side of the trade (penalty)
    pub specified: i64,

    /// Delta on the unspecified side of the trade (bonus)
    pub unspecified: i64,
}

/// The assets involved in a trade, resolved from its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAssets {
    pub specified: Pubkey,
    pub unspecified: Pubkey,
}

impl SwapAssets {
    /// Resolve the specified and unspecified assets of a trade.
    ///
    /// A negative `amount_specified` is an exact input, a positive one an exact output.
    ///
    /// # Arguments
    /// * `asset_0` - The first asset of the venue.
    /// * `asset_1` - The second asset of the venue.
    /// * `zero_for_one` - Whether the trader sells asset 0 for asset 1.
    /// * `amount_specified` - The signed trade magnitude.
    pub fn resolve(
        asset_0: Pubkey,
        asset_1: Pubkey,
        zero_for_one: bool,
        amount_specified: i64,
    ) -> Self {
        let exact_input = amount_specified < 0;

        if zero_for_one == exact_input {
            SwapAssets {
                specified: asset_0,
                unspecified: asset_1,
            }
        } else {
            SwapAssets {
                specified: asset_1,
                unspecified: asset_0,
            }
        }
    }
}
