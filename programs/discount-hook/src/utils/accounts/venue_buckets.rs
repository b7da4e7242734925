use crate::state::Venue;
use crate::utils::{EncryptedEvaluator, FinalizeOutcome};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use shared::constants::PRIMING_DEPTH;

/// Bucketed schedule of a venue.
///
/// The discount only moves at bucket boundaries, from values evaluated by the coprocessor
/// on the hidden params of the cycle. Committed values never go down within a cycle and never
/// exceed the reserve discount.
impl Venue {
    /// Hash binding evaluations to the running cycle: venue, start time and config.
    pub fn cycle_context(&self) -> [u8; 32] {
        hashv(&[
            self.venue_id.as_ref(),
            &self.auction.start_time.to_le_bytes(),
            &self.auction.config.to_bytes(),
        ])
        .to_bytes()
    }

    pub fn current_bucket(&self, current_time: u64) -> Result<u32> {
        self.auction.current_bucket(current_time)
    }

    /// Handle of the evaluation of `bucket`, requesting it if it wasn't yet.
    pub(crate) fn ensure_bucket_handle(
        &mut self,
        bucket: u32,
        evaluator: &mut dyn EncryptedEvaluator,
    ) -> Result<u64> {
        let existing = self.bucket_handles[bucket as usize];
        if existing != 0 {
            return Ok(existing);
        }

        let context = self.cycle_context();
        let handle = evaluator.request(&self.encrypted_params, bucket, context)?;
        self.bucket_handles[bucket as usize] = handle;

        Ok(handle)
    }

    /// Request `from_bucket` and the next PRIMING_DEPTH buckets, bounded by the cycle, so the
    /// coprocessor works ahead of time.
    pub(crate) fn prime_buckets(
        &mut self,
        from_bucket: u32,
        evaluator: &mut dyn EncryptedEvaluator,
    ) -> Result<()> {
        let last_bucket = self.auction.config.bucket_count()?.saturating_sub(1);
        let until = from_bucket.saturating_add(PRIMING_DEPTH).min(last_bucket);

        for bucket in from_bucket..=until {
            self.ensure_bucket_handle(bucket, evaluator)?;
        }

        Ok(())
    }

    /// Commit the evaluation of the current bucket if it is available.
    ///
    /// * Not ready: nothing changes.
    /// * Ready but for another cycle or bucket: dropped.
    /// * Ready: d = min(max(result, last committed), reserve), then the next buckets are primed.
    /// * Duration elapsed: the reserve discount is committed without waiting for the coprocessor.
    pub(crate) fn finalize_bucket(
        &mut self,
        current_time: u64,
        evaluator: &mut dyn EncryptedEvaluator,
    ) -> Result<FinalizeOutcome> {
        if !self.auction.active {
            return Ok(FinalizeOutcome::Idle);
        }

        let bucket = self.current_bucket(current_time)?;

        if self.auction.is_expired(current_time) {
            return Ok(self.commit_bucket(bucket, self.auction.config.reserve_discount_bp));
        }

        let handle = self.ensure_bucket_handle(bucket, evaluator)?;

        if !evaluator.is_ready(handle) {
            return Ok(FinalizeOutcome::NotReady { bucket });
        }

        let evaluation = evaluator.decrypt(handle)?;

        if evaluation.context != self.cycle_context() || evaluation.bucket != bucket {
            return Ok(FinalizeOutcome::Ignored { bucket });
        }

        let outcome = self.commit_bucket(bucket, evaluation.result_bp);

        if let FinalizeOutcome::Committed { .. } = outcome {
            self.prime_buckets(bucket, evaluator)?;
        }

        Ok(outcome)
    }

    fn commit_bucket(&mut self, bucket: u32, result_bp: i64) -> FinalizeOutcome {
        if bucket < self.auction.last_updated_bucket {
            return FinalizeOutcome::Ignored { bucket };
        }

        let discount_bp = result_bp
            .max(self.auction.last_discount_bp)
            .min(self.auction.config.reserve_discount_bp);
        let first_commit = !self.auction.is_bucket_committed(bucket);

        self.auction.last_discount_bp = discount_bp;
        self.auction.last_updated_bucket = bucket;
        self.auction.committed_buckets |= 1u32 << bucket;

        FinalizeOutcome::Committed {
            bucket,
            discount_bp,
            first_commit,
        }
    }
}
