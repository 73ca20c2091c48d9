//! Odds conversion and hedge economics.
//!
//! Pure arithmetic over `Decimal`: American moneylines to decimal odds,
//! and the break-even hedge stake for a bonus bet. A bonus bet returns
//! profit only (the stake is forfeited either way), so the bonus-wins
//! payout is `stake * (d_bonus - 1)` and the hedge stake is solved so
//! both branches pay the same.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::OddsError;

/// Derived economics for one (bonus, hedge) price pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeMetrics {
    /// Cash to stake on the complementary outcome.
    pub hedge_stake: Decimal,
    /// Profit locked in regardless of which side wins.
    pub locked_profit: Decimal,
    /// Locked profit as a fraction of the bonus stake.
    pub efficiency: Decimal,
}

/// Convert signed American odds to decimal odds.
///
/// `+N` pays `1 + N/100` per unit, `-N` pays `1 + 100/N`. Zero has no
/// decimal equivalent.
pub fn to_decimal_odds(american: i64) -> Result<Decimal, OddsError> {
    if american == 0 {
        return Err(OddsError::ZeroAmerican);
    }
    let magnitude = Decimal::from(american.abs());
    let edge = if american > 0 {
        magnitude / dec!(100)
    } else {
        dec!(100) / magnitude
    };
    Ok(Decimal::ONE + edge)
}

/// Compute the break-even hedge for a bonus bet.
///
/// Solves `stake*(d_bonus-1) - hedge = hedge*(d_hedge-1)` minus the
/// forfeited bonus stake, giving the closed form
/// `hedge = stake*(d_bonus-1) / d_hedge`. No rounding is applied here;
/// cents are a presentation concern.
pub fn compute_hedge(
    bonus_decimal_odds: Decimal,
    hedge_decimal_odds: Decimal,
    bonus_stake: Decimal,
) -> Result<HedgeMetrics, OddsError> {
    if bonus_decimal_odds <= Decimal::ONE {
        return Err(OddsError::SubUnityDecimal {
            odds: bonus_decimal_odds,
        });
    }
    if hedge_decimal_odds <= Decimal::ONE {
        return Err(OddsError::SubUnityDecimal {
            odds: hedge_decimal_odds,
        });
    }
    if bonus_stake <= Decimal::ZERO {
        return Err(OddsError::NonPositiveStake { stake: bonus_stake });
    }

    let bonus_payout = bonus_stake * (bonus_decimal_odds - Decimal::ONE);
    let hedge_stake = bonus_payout / hedge_decimal_odds;
    let locked_profit = bonus_payout - hedge_stake;
    let efficiency = locked_profit / bonus_stake;

    Ok(HedgeMetrics {
        hedge_stake,
        locked_profit,
        efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Equality within Decimal division round-off.
    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.000000001)
    }

    #[test]
    fn positive_american_to_decimal() {
        assert_eq!(to_decimal_odds(525).unwrap(), dec!(6.25));
        assert_eq!(to_decimal_odds(100).unwrap(), dec!(2));
        assert_eq!(to_decimal_odds(260).unwrap(), dec!(3.6));
    }

    #[test]
    fn negative_american_to_decimal() {
        assert_eq!(to_decimal_odds(-100).unwrap(), dec!(2));
        assert_eq!(to_decimal_odds(-200).unwrap(), dec!(1.5));
        assert!(close(
            to_decimal_odds(-600).unwrap(),
            Decimal::ONE + dec!(1) / dec!(6)
        ));
    }

    #[test]
    fn decimal_odds_always_exceed_one() {
        for american in [-10_000, -600, -105, -100, 100, 105, 525, 10_000] {
            assert!(to_decimal_odds(american).unwrap() > Decimal::ONE);
        }
    }

    #[test]
    fn zero_american_is_rejected() {
        assert_eq!(to_decimal_odds(0), Err(OddsError::ZeroAmerican));
    }

    #[test]
    fn documented_example_at_ten_dollars() {
        // +525 bonus vs -600 hedge at $10.
        let bonus = to_decimal_odds(525).unwrap();
        let hedge = to_decimal_odds(-600).unwrap();
        let m = compute_hedge(bonus, hedge, dec!(10)).unwrap();

        assert_eq!(m.hedge_stake.round_dp(2), dec!(45.00));
        assert_eq!(m.locked_profit.round_dp(2), dec!(7.50));
        assert_eq!((m.efficiency * dec!(100)).round_dp(2), dec!(75.00));
    }

    #[test]
    fn documented_example_at_full_stake() {
        // Same pair at $250; efficiency is stake-invariant.
        let bonus = to_decimal_odds(525).unwrap();
        let hedge = to_decimal_odds(-600).unwrap();
        let m = compute_hedge(bonus, hedge, dec!(250)).unwrap();

        assert_eq!(m.hedge_stake.round_dp(2), dec!(1125.00));
        assert_eq!(m.locked_profit.round_dp(2), dec!(187.50));
        assert_eq!((m.efficiency * dec!(100)).round_dp(2), dec!(75.00));
    }

    #[test]
    fn documented_example_mavericks_lakers() {
        // +260 bonus vs -305 hedge at $250.
        let bonus = to_decimal_odds(260).unwrap();
        let hedge = to_decimal_odds(-305).unwrap();
        let m = compute_hedge(bonus, hedge, dec!(250)).unwrap();

        assert_eq!(m.hedge_stake.round_dp(2), dec!(489.51));
        assert_eq!(m.locked_profit.round_dp(2), dec!(160.49));
        assert_eq!((m.efficiency * dec!(100)).round_dp(2), dec!(64.20));
    }

    #[test]
    fn payout_branches_are_equal() {
        // The defining property of a hedge: both branches pay the same.
        let cases = [
            (525, -600, dec!(10)),
            (260, -305, dec!(250)),
            (110, -120, dec!(50)),
            (-150, 140, dec!(75)),
        ];
        for (bonus_american, hedge_american, stake) in cases {
            let d_bonus = to_decimal_odds(bonus_american).unwrap();
            let d_hedge = to_decimal_odds(hedge_american).unwrap();
            let m = compute_hedge(d_bonus, d_hedge, stake).unwrap();

            let bonus_wins = stake * (d_bonus - Decimal::ONE) - m.hedge_stake;
            let hedge_wins = m.hedge_stake * (d_hedge - Decimal::ONE);
            assert!(
                close(bonus_wins, hedge_wins),
                "branches diverge for ({bonus_american}, {hedge_american}): {bonus_wins} vs {hedge_wins}"
            );
            assert!(close(m.locked_profit, bonus_wins));
        }
    }

    #[test]
    fn efficiency_rises_with_hedge_odds() {
        let bonus = to_decimal_odds(300).unwrap();
        let stake = dec!(100);
        let mut last = Decimal::MIN;
        for hedge_american in [-500, -300, -150, 110, 150, 250] {
            let hedge = to_decimal_odds(hedge_american).unwrap();
            let m = compute_hedge(bonus, hedge, stake).unwrap();
            assert!(m.efficiency > last, "not monotone at {hedge_american}");
            last = m.efficiency;
        }
    }

    #[test]
    fn sub_unity_decimal_is_rejected() {
        assert!(matches!(
            compute_hedge(dec!(1), dec!(2), dec!(10)),
            Err(OddsError::SubUnityDecimal { .. })
        ));
        assert!(matches!(
            compute_hedge(dec!(2), dec!(0.95), dec!(10)),
            Err(OddsError::SubUnityDecimal { .. })
        ));
    }

    #[test]
    fn non_positive_stake_is_rejected() {
        assert!(matches!(
            compute_hedge(dec!(2), dec!(2), Decimal::ZERO),
            Err(OddsError::NonPositiveStake { .. })
        ));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = compute_hedge(dec!(6.25), dec!(1.2), dec!(250)).unwrap();
        let b = compute_hedge(dec!(6.25), dec!(1.2), dec!(250)).unwrap();
        assert_eq!(a, b);
    }
}
