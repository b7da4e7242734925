use anchor_lang::prelude::*;

/// Hidden randomization of one auction cycle. Both values are opaque ciphertexts, only the
/// coprocessor can evaluate them.
#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct EncryptedParams {
    /// Time shift (tau)
    pub encrypted_tau: [u8; 32],

    /// Slope perturbation (epsilon)
    pub encrypted_eps: [u8; 32],

    /// Fresh params waiting for the next cycle. Cleared when a cycle starts, the values stay
    /// bound to that cycle until overwritten.
    pub armed: bool,
}
