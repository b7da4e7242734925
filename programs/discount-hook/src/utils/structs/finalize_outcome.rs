use crate::events::{BucketFinalized, EvaluationIgnored};
use crate::utils::Settlement;
use anchor_lang::prelude::*;

/// What a call to finalize the current bucket did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// No running bucketed auction, nothing to finalize.
    Idle,

    /// The evaluation of the bucket is not available yet, nothing changed.
    NotReady { bucket: u32 },

    /// The evaluation doesn't belong to the current cycle or is older than the last committed
    /// bucket, it was dropped.
    Ignored { bucket: u32 },

    /// A discount was committed. `first_commit` is false when the bucket had already been
    /// committed before (repeated finalization).
    Committed {
        bucket: u32,
        discount_bp: i64,
        first_commit: bool,
    },
}

impl FinalizeOutcome {
    /// Whether the caller that produced this outcome earns the finalizer reward.
    pub fn rewards_finalizer(&self) -> bool {
        matches!(
            self,
            FinalizeOutcome::Committed {
                first_commit: true,
                ..
            }
        )
    }

    /// Emit the event of a committed or dropped evaluation. Idle and pending outcomes changed
    /// nothing and emit nothing.
    pub fn emit_transition(&self, venue: Pubkey) {
        match *self {
            FinalizeOutcome::Ignored { bucket } => {
                emit!(EvaluationIgnored { venue, bucket });
            }
            FinalizeOutcome::Committed {
                bucket,
                discount_bp,
                ..
            } => {
                emit!(BucketFinalized {
                    venue,
                    bucket,
                    discount_bp,
                });
            }
            FinalizeOutcome::Idle | FinalizeOutcome::NotReady { .. } => {}
        }
    }
}

/// The discount a trade settles at, and what finalizing the current bucket did on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountUpdate {
    pub discount_bp: i64,
    pub outcome: FinalizeOutcome,
}

/// Everything `before_swap` decides before touching the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeQuote {
    /// The trade started a new cycle.
    pub started: bool,
    pub update: DiscountUpdate,
    pub settlement: Settlement,
}
