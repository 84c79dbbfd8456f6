use plutus_core::RiskTolerance;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Whole-share position size for a proposed entry
///
/// `risk_fraction` is the strategy rule's base fraction of capital to commit
/// (0.02-0.20), scaled by the agent's risk tolerance. Returns 0 whenever
/// capital, price, or the fraction is non-positive; never negative by type.
pub fn position_size(
    risk: RiskTolerance,
    capital: Decimal,
    price: Decimal,
    risk_fraction: Decimal,
) -> u64 {
    if capital <= Decimal::ZERO || price <= Decimal::ZERO || risk_fraction <= Decimal::ZERO {
        return 0;
    }
    let position_value = capital * risk_fraction * risk.size_multiplier();
    (position_value / price).floor().to_u64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_medium_risk_is_unscaled() {
        // 100_000 * 0.1 * 1.0 / 100 = 100 shares
        let qty = position_size(RiskTolerance::Medium, dec!(100000), dec!(100), dec!(0.1));
        assert_eq!(qty, 100);
    }

    #[test]
    fn test_tolerance_scales_size() {
        let low = position_size(RiskTolerance::Low, dec!(100000), dec!(100), dec!(0.1));
        let high = position_size(RiskTolerance::High, dec!(100000), dec!(100), dec!(0.1));
        assert_eq!(low, 50);
        assert_eq!(high, 150);
    }

    #[test]
    fn test_fractional_shares_floor() {
        // 10_000 * 0.05 / 151 = 3.31... -> 3 shares
        let qty = position_size(RiskTolerance::Medium, dec!(10000), dec!(151), dec!(0.05));
        assert_eq!(qty, 3);
    }

    #[test]
    fn test_zero_on_non_positive_inputs() {
        for (capital, price) in [
            (dec!(0), dec!(100)),
            (dec!(-500), dec!(100)),
            (dec!(100000), dec!(0)),
            (dec!(100000), dec!(-1)),
        ] {
            for risk in [
                RiskTolerance::Low,
                RiskTolerance::Medium,
                RiskTolerance::High,
            ] {
                assert_eq!(position_size(risk, capital, price, dec!(0.1)), 0);
            }
        }
        assert_eq!(
            position_size(RiskTolerance::High, dec!(100000), dec!(100), dec!(0)),
            0
        );
    }
}
