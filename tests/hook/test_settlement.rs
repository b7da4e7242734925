//! Tests for the settlement of trades against the reserves

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use discount_hook::utils::{Settlement, SwapAdjustment};
    use fund_ledger::state::Reserve;

    /// Apply a settlement the way `before_swap` does, on in-memory reserves.
    fn settle(
        amount_specified: i64,
        discount_bp: i64,
        specified_reserve: &mut Reserve,
        unspecified_reserve: &mut Reserve,
    ) -> SwapAdjustment {
        let settlement =
            Settlement::compute(amount_specified, discount_bp, unspecified_reserve.available())
                .unwrap();

        match settlement {
            Settlement::Penalty { amount } => specified_reserve.collect_penalty(amount).unwrap(),
            Settlement::Bonus { amount } => unspecified_reserve.pay_bonus(amount).unwrap(),
            Settlement::BonusSkipped { .. } | Settlement::None => {}
        }

        settlement.adjustment().unwrap()
    }

    fn reserve(balance: u64) -> Reserve {
        let mut reserve = Reserve::default();
        reserve.init(250, Pubkey::new_unique());
        if balance > 0 {
            reserve.deposit(balance).unwrap();
        }
        reserve
    }

    #[test]
    fn test_penalty() {
        let settlement = Settlement::compute(-1_000_000, -100, 0).unwrap();

        assert_eq!(settlement, Settlement::Penalty { amount: 10_000 });
        assert_eq!(
            settlement.adjustment().unwrap(),
            SwapAdjustment {
                specified: 10_000,
                unspecified: 0,
            }
        );
    }

    #[test]
    fn test_penalty_uses_magnitude_of_exact_output() {
        assert_eq!(
            Settlement::compute(1_000_000, -100, 0).unwrap(),
            Settlement::Penalty { amount: 10_000 }
        );
    }

    #[test]
    fn test_bonus() {
        let settlement = Settlement::compute(-1_000_000, 250, 25_000).unwrap();

        assert_eq!(settlement, Settlement::Bonus { amount: 25_000 });
        assert_eq!(
            settlement.adjustment().unwrap(),
            SwapAdjustment {
                specified: 0,
                unspecified: -25_000,
            }
        );
    }

    #[test]
    fn test_bonus_skipped_when_reserve_is_short() {
        let settlement = Settlement::compute(-1_000_000, 250, 24_999).unwrap();

        assert_eq!(
            settlement,
            Settlement::BonusSkipped {
                amount: 25_000,
                available: 24_999,
            }
        );
        assert_eq!(settlement.adjustment().unwrap(), SwapAdjustment::default());
    }

    #[test]
    fn test_zero_discount_or_dust() {
        assert_eq!(Settlement::compute(-1_000_000, 0, 0).unwrap(), Settlement::None);
        assert_eq!(Settlement::compute(0, -500, 0).unwrap(), Settlement::None);
        // 99 * 100 / 10_000 rounds down to 0
        assert_eq!(Settlement::compute(-99, -100, 0).unwrap(), Settlement::None);
        assert_eq!(Settlement::compute(99, 100, 1_000).unwrap(), Settlement::None);
        assert_eq!(
            Settlement::None.adjustment().unwrap(),
            SwapAdjustment::default()
        );
    }

    #[test]
    fn test_extreme_amounts() {
        assert_eq!(
            Settlement::compute(i64::MIN, -5_000, 0).unwrap(),
            Settlement::Penalty {
                amount: 1u64 << 62
            }
        );
        assert!(Settlement::compute(i64::MIN, -10_000, 0)
            .unwrap()
            .adjustment()
            .is_err());
        assert_eq!(
            Settlement::compute(i64::MAX, 10_000, u64::MAX)
                .unwrap()
                .adjustment()
                .unwrap(),
            SwapAdjustment {
                specified: 0,
                unspecified: -i64::MAX,
            }
        );
    }

    #[test]
    fn test_penalty_flows_into_reserve() {
        let mut specified_reserve = reserve(0);
        let mut unspecified_reserve = reserve(0);

        let adjustment = settle(
            -1_000_000,
            -100,
            &mut specified_reserve,
            &mut unspecified_reserve,
        );

        assert_eq!(adjustment.specified, 10_000);
        assert_eq!(specified_reserve.available(), 10_000);
        assert_eq!(unspecified_reserve.available(), 0);
    }

    #[test]
    fn test_bonus_is_paid_from_reserve() {
        let mut specified_reserve = reserve(0);
        let mut unspecified_reserve = reserve(30_000);

        let adjustment = settle(
            -1_000_000,
            250,
            &mut specified_reserve,
            &mut unspecified_reserve,
        );

        assert_eq!(adjustment.unspecified, -25_000);
        assert_eq!(unspecified_reserve.available(), 5_000);
        assert_eq!(specified_reserve.available(), 0);
    }

    #[test]
    fn test_short_reserve_leaves_trade_unchanged() {
        let mut specified_reserve = reserve(0);
        let mut unspecified_reserve = reserve(1_000);

        let adjustment = settle(
            -1_000_000,
            250,
            &mut specified_reserve,
            &mut unspecified_reserve,
        );

        assert_eq!(adjustment, SwapAdjustment::default());
        assert_eq!(unspecified_reserve.available(), 1_000);
    }

    #[test]
    fn test_conservation_over_a_sequence_of_trades() {
        let mut reserve_0 = reserve(0);
        let mut reserve_1 = reserve(0);

        // (zero_for_one, amount_specified, discount_bp)
        let trades: [(bool, i64, i64); 6] = [
            (true, -1_000_000, -1_000),
            (false, -400_000, -500),
            (true, 2_000_000, -20),
            (false, -1_000_000, 300),
            (true, -3_000_000, 800),
            (true, 500_000, 100),
        ];

        let mut paid_out: i128 = 0;
        let mut taken_in: i128 = 0;

        for (zero_for_one, amount_specified, discount_bp) in trades {
            let specified_is_0 = zero_for_one == (amount_specified < 0);
            let (specified, unspecified) = if specified_is_0 {
                (&mut reserve_0, &mut reserve_1)
            } else {
                (&mut reserve_1, &mut reserve_0)
            };

            let adjustment = settle(amount_specified, discount_bp, specified, unspecified);

            taken_in += adjustment.specified as i128;
            paid_out -= adjustment.unspecified as i128;
        }

        let balances = reserve_0.available() as i128 + reserve_1.available() as i128;
        assert_eq!(balances, taken_in - paid_out);
        assert!(balances >= 0);
    }
}
