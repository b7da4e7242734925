use crate::utils::EncryptedParams;
use anchor_lang::prelude::*;

/// A decrypted evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub bucket: u32,

    pub context: [u8; 32],

    pub result_bp: i64,
}

/// Asynchronous evaluator of the hidden discount schedule.
///
/// `request` returns a handle immediately, the result becomes available later. Nothing blocks:
/// callers poll `is_ready` and only then `decrypt`.
pub trait EncryptedEvaluator {
    /// Request the discount of `bucket` under the given encrypted params.
    ///
    /// # Arguments
    /// * `params` - The encrypted params of the cycle.
    /// * `bucket` - The bucket to evaluate.
    /// * `context` - The hash of the cycle, echoed back with the result.
    fn request(&mut self, params: &EncryptedParams, bucket: u32, context: [u8; 32]) -> Result<u64>;

    fn is_ready(&self, handle: u64) -> bool;

    /// Only valid once `is_ready` returns true.
    fn decrypt(&self, handle: u64) -> Result<Evaluation>;
}
