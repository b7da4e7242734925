//! Error codes for the programs.
//!
//! Custom error for Anchor programs start at 6000. i.e. here Unauthorized error would be 6000 and
//! InvalidPda would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid PDA")]
    InvalidPda,

    #[msg("Math Overflow")]
    MathOverflow,

    #[msg("Invalid Amount")]
    InvalidAmount,

    #[msg("Invalid Auction Duration")]
    InvalidAuctionDuration,

    #[msg("Invalid Bucket Seconds")]
    InvalidBucketSeconds,

    #[msg("Too Many Buckets")]
    TooManyBuckets,

    #[msg("Invalid Discount Range")]
    InvalidDiscountRange,

    #[msg("Auction Already Active")]
    AuctionAlreadyActive,

    #[msg("Auction Not Active")]
    AuctionNotActive,

    #[msg("Encrypted Params Not Set")]
    EncryptedParamsNotSet,

    #[msg("Missing Evaluation Queue")]
    MissingEvaluationQueue,

    #[msg("Invalid Evaluation Queue")]
    InvalidEvaluationQueue,

    #[msg("Unknown Evaluation Handle")]
    UnknownEvaluationHandle,

    #[msg("Evaluation Not Ready")]
    EvaluationNotReady,

    #[msg("Evaluation Already Submitted")]
    EvaluationAlreadySubmitted,

    #[msg("Evaluation Context Mismatch")]
    EvaluationContextMismatch,

    #[msg("Invalid Venue Asset")]
    InvalidVenueAsset,

    #[msg("Invalid Reserve")]
    InvalidReserve,

    #[msg("Insufficient Reserve")]
    InsufficientReserve,

    #[msg("Invalid Callback Program")]
    InvalidCallbackProgram,

    #[msg("No Pending Execution")]
    NoPendingExecution,

    #[msg("Missing Remaining Account")]
    MissingRemainingAccount,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
