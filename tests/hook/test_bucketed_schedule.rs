//! Tests for the bucketed schedule driven by the coprocessor

#[cfg(test)]
mod tests {
    use crate::shared::logger::init_logger;
    use anchor_lang::prelude::*;
    use discount_hook::state::{EvaluationQueue, Venue};
    use discount_hook::utils::{
        AuctionConfig, AuctionState, DiscountMode, EncryptedEvaluator, EncryptedParams,
        Evaluation, FinalizeOutcome,
    };
    use log::info;
    use shared::constants::MAX_BUCKETS;
    use shared::errors::ErrorCode;
    use std::collections::HashMap;

    const START: u64 = 1_000;

    /// Evaluator answering whatever the test scripted for a handle.
    #[derive(Default)]
    struct ScriptedEvaluator {
        requests: Vec<(u32, [u8; 32])>,
        results: HashMap<u64, Evaluation>,
    }

    impl EncryptedEvaluator for ScriptedEvaluator {
        fn request(
            &mut self,
            _params: &EncryptedParams,
            bucket: u32,
            context: [u8; 32],
        ) -> Result<u64> {
            self.requests.push((bucket, context));
            Ok(self.requests.len() as u64)
        }

        fn is_ready(&self, handle: u64) -> bool {
            self.results.contains_key(&handle)
        }

        fn decrypt(&self, handle: u64) -> Result<Evaluation> {
            self.results
                .get(&handle)
                .copied()
                .ok_or(ErrorCode::EvaluationNotReady.into())
        }
    }

    fn config() -> AuctionConfig {
        AuctionConfig {
            start_discount_bp: -1000,
            reserve_discount_bp: 800,
            decay_rate_bp_per_sec: 0,
            duration: 600,
            bucket_seconds: 60,
        }
    }

    fn setup_venue() -> Venue {
        let mut venue = Venue::default();
        venue
            .init(
                250,
                [9; 32],
                DiscountMode::Bucketed,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                config(),
            )
            .unwrap();
        venue.set_encrypted_params([1; 32], [2; 32]).unwrap();
        venue
    }

    fn as_evaluator(queue: &mut EvaluationQueue) -> Option<&mut dyn EncryptedEvaluator> {
        Some(queue as &mut dyn EncryptedEvaluator)
    }

    fn setup_running() -> (Venue, EvaluationQueue) {
        let mut venue = setup_venue();
        let mut queue = EvaluationQueue::default();

        venue
            .start_auction(START, None, as_evaluator(&mut queue))
            .unwrap();

        (venue, queue)
    }

    fn submit(venue: &Venue, queue: &mut EvaluationQueue, bucket: usize, result_bp: i64) {
        queue
            .submit(venue.bucket_handles[bucket], venue.cycle_context(), result_bp)
            .unwrap();
    }

    #[test]
    fn test_start_primes_first_buckets() {
        init_logger();
        let (venue, queue) = setup_running();

        assert!(venue.auction.active);
        assert!(!venue.encrypted_params.armed);
        assert_eq!(venue.auction.last_discount_bp, -1000);
        assert_eq!(queue.next_handle, 3);
        assert_eq!(&venue.bucket_handles[0..4], &[1, 2, 3, 0]);

        let context = venue.cycle_context();
        for bucket in 0..3u32 {
            let request = queue.find(venue.bucket_handles[bucket as usize]).unwrap();
            assert_eq!(request.bucket, bucket);
            assert_eq!(request.context, context);
            assert_eq!(request.encrypted_tau, [1; 32]);
        }

        info!("primed {} requests", queue.pending_count());
    }

    #[test]
    fn test_start_requires_armed_params() {
        let mut venue = Venue::default();
        venue
            .init(
                250,
                [9; 32],
                DiscountMode::Bucketed,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                config(),
            )
            .unwrap();
        let mut queue = EvaluationQueue::default();

        assert_eq!(
            venue
                .start_auction(START, None, as_evaluator(&mut queue))
                .err(),
            Some(ErrorCode::EncryptedParamsNotSet.into())
        );
        assert!(!venue.auction.active);
        assert_eq!(queue.next_handle, 0);
    }

    #[test]
    fn test_start_requires_evaluator() {
        let mut venue = setup_venue();

        assert_eq!(
            venue.start_auction(START, None, None).err(),
            Some(ErrorCode::MissingEvaluationQueue.into())
        );
        assert!(!venue.auction.active);
        assert!(venue.encrypted_params.armed);
    }

    #[test]
    fn test_not_ready_is_a_noop() {
        let (mut venue, mut queue) = setup_running();
        let before = venue.auction;

        let outcome = venue.finalize_current_bucket(START + 10, &mut queue).unwrap();

        assert_eq!(outcome, FinalizeOutcome::NotReady { bucket: 0 });
        assert_eq!(venue.auction, before);
        assert_eq!(queue.next_handle, 3);
    }

    #[test]
    fn test_commit_primes_next_buckets() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 0, -900);
        assert_eq!(
            venue.finalize_current_bucket(START + 10, &mut queue).unwrap(),
            FinalizeOutcome::Committed {
                bucket: 0,
                discount_bp: -900,
                first_commit: true,
            }
        );
        // Buckets 1 and 2 were already requested at start
        assert_eq!(queue.next_handle, 3);

        submit(&venue, &mut queue, 1, -700);
        assert_eq!(
            venue.finalize_current_bucket(START + 60, &mut queue).unwrap(),
            FinalizeOutcome::Committed {
                bucket: 1,
                discount_bp: -700,
                first_commit: true,
            }
        );
        assert_eq!(venue.auction.last_updated_bucket, 1);
        assert_eq!(queue.next_handle, 4);
        assert_eq!(venue.bucket_handles[3], 4);
        assert_eq!(queue.find(4).unwrap().bucket, 3);
    }

    #[test]
    fn test_never_decreases() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 0, -500);
        venue.finalize_current_bucket(START, &mut queue).unwrap();

        submit(&venue, &mut queue, 1, -800);
        let outcome = venue.finalize_current_bucket(START + 61, &mut queue).unwrap();

        assert_eq!(
            outcome,
            FinalizeOutcome::Committed {
                bucket: 1,
                discount_bp: -500,
                first_commit: true,
            }
        );
        assert_eq!(venue.current_discount(START + 61), -500);
    }

    #[test]
    fn test_capped_at_reserve() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 0, 5_000);
        venue.finalize_current_bucket(START, &mut queue).unwrap();

        assert_eq!(venue.auction.last_discount_bp, 800);
    }

    #[test]
    fn test_repeated_finalization_is_idempotent() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 0, -300);
        venue.finalize_current_bucket(START + 5, &mut queue).unwrap();
        let after_first = venue.auction;
        let handles = venue.bucket_handles;

        let outcome = venue.finalize_current_bucket(START + 6, &mut queue).unwrap();

        assert_eq!(
            outcome,
            FinalizeOutcome::Committed {
                bucket: 0,
                discount_bp: -300,
                first_commit: false,
            }
        );
        assert_eq!(venue.auction, after_first);
        assert_eq!(venue.bucket_handles, handles);
        assert_eq!(queue.next_handle, 3);
    }

    #[test]
    fn test_stale_bucket_never_overwrites_newer_one() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 2, 200);
        venue.finalize_current_bucket(START + 130, &mut queue).unwrap();
        assert_eq!(venue.auction.last_updated_bucket, 2);

        submit(&venue, &mut queue, 1, 400);
        let outcome = venue.finalize_current_bucket(START + 70, &mut queue).unwrap();

        assert_eq!(outcome, FinalizeOutcome::Ignored { bucket: 1 });
        assert_eq!(venue.auction.last_discount_bp, 200);
        assert_eq!(venue.auction.last_updated_bucket, 2);
    }

    #[test]
    fn test_terminal_bucket_commits_reserve() {
        let (mut venue, mut queue) = setup_running();

        let outcome = venue.finalize_current_bucket(START + 600, &mut queue).unwrap();

        assert_eq!(
            outcome,
            FinalizeOutcome::Committed {
                bucket: 9,
                discount_bp: 800,
                first_commit: true,
            }
        );
        assert_eq!(queue.next_handle, 3);
    }

    #[test]
    fn test_foreign_context_is_ignored() {
        let mut venue = setup_venue();
        let mut evaluator = ScriptedEvaluator::default();

        venue
            .start_auction(START, None, Some(&mut evaluator as &mut dyn EncryptedEvaluator))
            .unwrap();
        assert_eq!(evaluator.requests.len(), 3);

        evaluator.results.insert(
            venue.bucket_handles[0],
            Evaluation {
                bucket: 0,
                context: [0xAA; 32],
                result_bp: 700,
            },
        );

        let outcome = venue.finalize_current_bucket(START, &mut evaluator).unwrap();

        assert_eq!(outcome, FinalizeOutcome::Ignored { bucket: 0 });
        assert_eq!(venue.auction.last_discount_bp, -1000);
    }

    #[test]
    fn test_wrong_bucket_is_ignored() {
        let mut venue = setup_venue();
        let mut evaluator = ScriptedEvaluator::default();

        venue
            .start_auction(START, None, Some(&mut evaluator as &mut dyn EncryptedEvaluator))
            .unwrap();

        evaluator.results.insert(
            venue.bucket_handles[0],
            Evaluation {
                bucket: 1,
                context: venue.cycle_context(),
                result_bp: 700,
            },
        );

        assert_eq!(
            venue.finalize_current_bucket(START, &mut evaluator).unwrap(),
            FinalizeOutcome::Ignored { bucket: 0 }
        );
        assert_eq!(venue.auction.last_discount_bp, -1000);
    }

    #[test]
    fn test_previous_cycle_results_are_isolated() {
        let (mut venue, mut queue) = setup_running();
        let old_context = venue.cycle_context();
        let old_handle = venue.bucket_handles[0];

        venue.end_auction(START + 100).unwrap();
        venue.set_encrypted_params([3; 32], [4; 32]).unwrap();
        venue
            .start_auction(START + 400, None, as_evaluator(&mut queue))
            .unwrap();

        assert_ne!(venue.cycle_context(), old_context);
        assert_eq!(&venue.bucket_handles[0..3], &[4, 5, 6]);

        // A late answer for the previous cycle lands on its own request only
        queue.submit(old_handle, old_context, 800).unwrap();

        let outcome = venue.finalize_current_bucket(START + 400, &mut queue).unwrap();

        assert_eq!(outcome, FinalizeOutcome::NotReady { bucket: 0 });
        assert_eq!(venue.auction.last_discount_bp, -1000);
    }

    #[test]
    fn test_replayed_evaluation_is_ignored() {
        let mut venue = setup_venue();
        let mut evaluator = ScriptedEvaluator::default();

        venue
            .start_auction(START, None, Some(&mut evaluator as &mut dyn EncryptedEvaluator))
            .unwrap();
        let old_context = venue.cycle_context();

        venue.end_auction(START + 30).unwrap();
        venue.set_encrypted_params([3; 32], [4; 32]).unwrap();
        venue
            .start_auction(
                START + 400,
                None,
                Some(&mut evaluator as &mut dyn EncryptedEvaluator),
            )
            .unwrap();

        evaluator.results.insert(
            venue.bucket_handles[0],
            Evaluation {
                bucket: 0,
                context: old_context,
                result_bp: 800,
            },
        );

        assert_eq!(
            venue.finalize_current_bucket(START + 400, &mut evaluator).unwrap(),
            FinalizeOutcome::Ignored { bucket: 0 }
        );
    }

    #[test]
    fn test_update_and_get() {
        let (mut venue, mut queue) = setup_running();

        assert_eq!(
            venue.update_and_get(START, None).err(),
            Some(ErrorCode::MissingEvaluationQueue.into())
        );
        assert_eq!(
            venue.update_and_get(START, as_evaluator(&mut queue)).unwrap().discount_bp,
            -1000
        );

        submit(&venue, &mut queue, 0, 150);

        assert_eq!(
            venue.update_and_get(START + 1, as_evaluator(&mut queue)).unwrap().discount_bp,
            150
        );
        assert_eq!(venue.current_discount(START + 1), 150);

        venue.end_auction(START + 2).unwrap();
        assert_eq!(venue.update_and_get(START + 3, None).unwrap().discount_bp, 0);
        assert_eq!(venue.current_discount(START + 3), 0);
    }

    #[test]
    fn test_trade_commit_reports_outcome() {
        let (mut venue, mut queue) = setup_running();

        submit(&venue, &mut queue, 0, 150);

        let update = venue
            .update_and_get(START + 1, as_evaluator(&mut queue))
            .unwrap();
        assert_eq!(update.discount_bp, 150);
        assert_eq!(
            update.outcome,
            FinalizeOutcome::Committed {
                bucket: 0,
                discount_bp: 150,
                first_commit: true,
            }
        );
        assert!(venue.auction.is_bucket_committed(0));

        // The crank after the trade recommits without earning the reward
        let outcome = venue.finalize_current_bucket(START + 2, &mut queue).unwrap();
        assert_eq!(
            outcome,
            FinalizeOutcome::Committed {
                bucket: 0,
                discount_bp: 150,
                first_commit: false,
            }
        );
        assert!(!outcome.rewards_finalizer());
    }

    #[test]
    fn test_trade_reports_pending_and_ignored_outcomes() {
        let (mut venue, mut queue) = setup_running();

        let update = venue
            .update_and_get(START + 1, as_evaluator(&mut queue))
            .unwrap();
        assert_eq!(update.discount_bp, -1000);
        assert_eq!(update.outcome, FinalizeOutcome::NotReady { bucket: 0 });

        let mut venue = setup_venue();
        let mut evaluator = ScriptedEvaluator::default();
        venue
            .start_auction(START, None, Some(&mut evaluator as &mut dyn EncryptedEvaluator))
            .unwrap();
        evaluator.results.insert(
            venue.bucket_handles[0],
            Evaluation {
                bucket: 0,
                context: [7; 32],
                result_bp: 700,
            },
        );

        let update = venue
            .update_and_get(START, Some(&mut evaluator as &mut dyn EncryptedEvaluator))
            .unwrap();
        assert_eq!(update.discount_bp, -1000);
        assert_eq!(update.outcome, FinalizeOutcome::Ignored { bucket: 0 });
    }

    #[test]
    fn test_rewards_finalizer() {
        assert!(FinalizeOutcome::Committed {
            bucket: 3,
            discount_bp: 10,
            first_commit: true,
        }
        .rewards_finalizer());
        assert!(!FinalizeOutcome::Committed {
            bucket: 3,
            discount_bp: 10,
            first_commit: false,
        }
        .rewards_finalizer());
        assert!(!FinalizeOutcome::Idle.rewards_finalizer());
        assert!(!FinalizeOutcome::NotReady { bucket: 3 }.rewards_finalizer());
        assert!(!FinalizeOutcome::Ignored { bucket: 3 }.rewards_finalizer());
    }

    #[test]
    fn test_committed_buckets_bounded_by_queue() {
        let state = AuctionState {
            committed_buckets: u32::MAX,
            ..AuctionState::default()
        };

        assert!(state.is_bucket_committed(0));
        assert!(state.is_bucket_committed(MAX_BUCKETS as u32 - 1));
        assert!(!state.is_bucket_committed(MAX_BUCKETS as u32));
        assert!(!state.is_bucket_committed(40));
    }

    #[test]
    fn test_current_bucket_is_clamped() {
        let (venue, _) = setup_running();

        assert_eq!(venue.current_bucket(START).unwrap(), 0);
        assert_eq!(venue.current_bucket(START + 59).unwrap(), 0);
        assert_eq!(venue.current_bucket(START + 60).unwrap(), 1);
        assert_eq!(venue.current_bucket(START + 599).unwrap(), 9);
        assert_eq!(venue.current_bucket(START + 10_000).unwrap(), 9);
    }

    #[test]
    fn test_cycle_context_binds_venue_and_start() {
        let (venue, _) = setup_running();

        let mut later = venue.clone();
        later.auction.start_time += 1;

        let mut other_venue = venue.clone();
        other_venue.venue_id = [8; 32];

        assert_eq!(venue.cycle_context(), venue.clone().cycle_context());
        assert_ne!(venue.cycle_context(), later.cycle_context());
        assert_ne!(venue.cycle_context(), other_venue.cycle_context());
    }

    #[test]
    fn test_linear_venue_has_nothing_to_finalize() {
        let mut venue = Venue::default();
        venue
            .init(
                250,
                [9; 32],
                DiscountMode::Linear,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                config(),
            )
            .unwrap();
        let mut queue = EvaluationQueue::default();

        venue.start_auction(START, None, None).unwrap();

        assert_eq!(
            venue.finalize_current_bucket(START, &mut queue).unwrap(),
            FinalizeOutcome::Idle
        );
        assert_eq!(queue.next_handle, 0);
    }
}
