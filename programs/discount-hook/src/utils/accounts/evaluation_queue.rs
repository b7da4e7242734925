use crate::state::{EvaluationQueue, EvaluationRequest};
use crate::utils::{EncryptedEvaluator, EncryptedParams, Evaluation};
use anchor_lang::prelude::*;
use std::cell::RefMut;
use shared::check_condition;
use shared::constants::MAX_BUCKETS;
use shared::errors::ErrorCode;

impl EvaluationQueue {
    /// Load the queue passed as an optional account, checking it belongs to the venue.
    ///
    /// # Arguments
    /// * `loader` - The optional evaluation queue account.
    /// * `venue` - The pubkey of the venue.
    #[cfg(not(tarpaulin_include))]
    pub fn load_for_venue<'a>(
        loader: &'a Option<AccountLoader<'_, EvaluationQueue>>,
        venue: &Pubkey,
    ) -> Result<Option<RefMut<'a, EvaluationQueue>>> {
        let Some(loader) = loader else {
            return Ok(None);
        };

        let queue = loader.load_mut()?;
        check_condition!(queue.venue == *venue, InvalidEvaluationQueue);

        Ok(Some(queue))
    }

    fn slot_index(handle: u64) -> usize {
        (handle % MAX_BUCKETS as u64) as usize
    }

    /// Find the live request of a handle. None if it was never issued or got overwritten.
    pub fn find(&self, handle: u64) -> Option<&EvaluationRequest> {
        if handle == 0 {
            return None;
        }

        let request = &self.requests[Self::slot_index(handle)];

        (request.handle == handle).then_some(request)
    }

    /// Store the result of a pending request. Called by the coprocessor.
    ///
    /// # Arguments
    /// * `handle` - The handle of the request.
    /// * `context` - The context the coprocessor evaluated, must match the request.
    /// * `result_bp` - The evaluated discount.
    pub fn submit(&mut self, handle: u64, context: [u8; 32], result_bp: i64) -> Result<()> {
        check_condition!(self.find(handle).is_some(), UnknownEvaluationHandle);

        let request = &mut self.requests[Self::slot_index(handle)];

        check_condition!(
            request.status == EvaluationRequest::PENDING,
            EvaluationAlreadySubmitted
        );
        check_condition!(request.context == context, EvaluationContextMismatch);

        request.result_bp = result_bp;
        request.status = EvaluationRequest::READY;

        Ok(())
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == EvaluationRequest::PENDING)
            .count()
    }
}

impl EncryptedEvaluator for EvaluationQueue {
    fn request(&mut self, params: &EncryptedParams, bucket: u32, context: [u8; 32]) -> Result<u64> {
        let handle = self
            .next_handle
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.next_handle = handle;

        self.requests[Self::slot_index(handle)] = EvaluationRequest {
            handle,
            bucket,
            status: EvaluationRequest::PENDING,
            _padding: [0; 3],
            result_bp: 0,
            context,
            encrypted_tau: params.encrypted_tau,
            encrypted_eps: params.encrypted_eps,
        };

        Ok(handle)
    }

    fn is_ready(&self, handle: u64) -> bool {
        self.find(handle)
            .is_some_and(|r| r.status == EvaluationRequest::READY)
    }

    fn decrypt(&self, handle: u64) -> Result<Evaluation> {
        let request = self
            .find(handle)
            .ok_or(ErrorCode::UnknownEvaluationHandle)?;

        check_condition!(
            request.status == EvaluationRequest::READY,
            EvaluationNotReady
        );

        Ok(Evaluation {
            bucket: request.bucket,
            context: request.context,
            result_bp: request.result_bp,
        })
    }
}
