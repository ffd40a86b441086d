//! Liquidity-rewards APY.
//!
//! ```text
//! apy = totalRewards * (12 / months) * nationPrice / (poolValue * totalDeposit / lpSupply)
//! ```
//!
//! `poolValue * totalDeposit / lpSupply` is the USD value of the LP tokens
//! staked in the distributor. The result is a ratio (0.8 = 80%) encoded with
//! 18 decimals; turning it into a percentage is left to the caller.

use alloy::primitives::U256;

use super::CalcError;
use super::normalize::{decode, unit};
use crate::model::amount::{PRICE_DECIMALS, ScaledAmount, TOKEN_DECIMALS};

/// Length of one reward program in months.
pub const REWARD_PERIOD_MONTHS: u32 = 6;

/// Complete input set for one APY computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApyInputs {
    pub total_rewards: ScaledAmount,
    pub pool_value_usd: ScaledAmount,
    pub total_deposit: ScaledAmount,
    pub lp_token_supply: ScaledAmount,
    pub nation_price_usd: ScaledAmount,
    pub reward_period_months: u32,
}

/// Fixed-point APY ratio with 18 decimals.
///
/// Every amount is normalised to 18 decimals and the price to 2 before any
/// arithmetic, so `decode(result)` matches [`apy_f64`] on the decoded inputs.
pub fn compute(inputs: &ApyInputs) -> Result<ScaledAmount, CalcError> {
    if inputs.reward_period_months == 0 {
        return Err(CalcError::DivisionByZero {
            what: "reward period",
        });
    }
    let rewards = inputs.total_rewards.rescale(TOKEN_DECIMALS)?.raw();
    let pool_value = inputs.pool_value_usd.rescale(TOKEN_DECIMALS)?.raw();
    let total_deposit = inputs.total_deposit.rescale(TOKEN_DECIMALS)?.raw();
    let lp_supply = inputs.lp_token_supply.rescale(TOKEN_DECIMALS)?.raw();
    let price = inputs.nation_price_usd.rescale(PRICE_DECIMALS)?.raw();

    if lp_supply.is_zero() {
        return Err(CalcError::DivisionByZero {
            what: "LP token supply",
        });
    }

    // USD value of the staked LP tokens, 18 decimals.
    let staked_value = pool_value
        .checked_mul(total_deposit)
        .ok_or(CalcError::Overflow)?
        / lp_supply;
    if staked_value.is_zero() {
        return Err(CalcError::DivisionByZero {
            what: "staked pool value",
        });
    }

    let one = unit(TOKEN_DECIMALS)?;
    let price_unit = unit(PRICE_DECIMALS)?;
    let numerator = rewards
        .checked_mul(U256::from(12u32))
        .and_then(|v| v.checked_mul(price))
        .and_then(|v| v.checked_mul(one))
        .ok_or(CalcError::Overflow)?;
    let denominator = U256::from(inputs.reward_period_months)
        .checked_mul(price_unit)
        .and_then(|v| v.checked_mul(staked_value))
        .ok_or(CalcError::Overflow)?;

    ScaledAmount::new(numerator / denominator, TOKEN_DECIMALS)
}

/// Floating-point variant operating on decoded values.
pub fn apy_f64(
    total_rewards: f64,
    pool_value_usd: f64,
    total_deposit: f64,
    lp_token_supply: f64,
    nation_price_usd: f64,
    reward_period_months: u32,
) -> Result<f64, CalcError> {
    if reward_period_months == 0 {
        return Err(CalcError::DivisionByZero {
            what: "reward period",
        });
    }
    if lp_token_supply == 0.0 {
        return Err(CalcError::DivisionByZero {
            what: "LP token supply",
        });
    }
    let staked_value = pool_value_usd * total_deposit / lp_token_supply;
    if staked_value == 0.0 {
        return Err(CalcError::DivisionByZero {
            what: "staked pool value",
        });
    }
    let annualization = 12.0 / reward_period_months as f64;
    Ok(total_rewards * annualization * nation_price_usd / staked_value)
}

impl ApyInputs {
    /// Same computation on decoded floats.
    pub fn compute_f64(&self) -> Result<f64, CalcError> {
        apy_f64(
            decode(&self.total_rewards),
            decode(&self.pool_value_usd),
            decode(&self.total_deposit),
            decode(&self.lp_token_supply),
            decode(&self.nation_price_usd),
            self.reward_period_months,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::normalize::{encode_str, decode};

    fn tokens(s: &str) -> ScaledAmount {
        encode_str(s, TOKEN_DECIMALS).unwrap()
    }

    fn inputs(t: &str, p: &str, d: &str, s: &str, n: &str) -> ApyInputs {
        ApyInputs {
            total_rewards: tokens(t),
            pool_value_usd: tokens(p),
            total_deposit: tokens(d),
            lp_token_supply: tokens(s),
            nation_price_usd: encode_str(n, PRICE_DECIMALS).unwrap(),
            reward_period_months: REWARD_PERIOD_MONTHS,
        }
    }

    #[test]
    fn worked_example() {
        // 100 * 2 * 2 / (1000 * 500 / 1000) = 0.8
        let i = inputs("100", "1000", "500", "1000", "2");
        let apy = compute(&i).unwrap();
        assert_eq!(apy.raw(), U256::from(800_000_000_000_000_000u128));
        assert!((decode(&apy) - 0.8).abs() < 1e-12);
        assert!((i.compute_f64().unwrap() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn fixed_point_matches_float_formula() {
        let i = inputs("250000", "3200000.55", "41000", "98000", "1.37");
        let fixed = decode(&compute(&i).unwrap());
        let float = i.compute_f64().unwrap();
        assert!((fixed - float).abs() / float < 1e-12, "{fixed} vs {float}");
    }

    #[test]
    fn inputs_with_other_decimals_are_normalised() {
        let mut i = inputs("100", "1000", "500", "1000", "2");
        // Pool value quoted as a whole-dollar integer.
        i.pool_value_usd = encode_str("1000", 0).unwrap();
        let apy = compute(&i).unwrap();
        assert!((decode(&apy) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn missing_price_yields_zero() {
        let i = inputs("100", "1000", "500", "1000", "0");
        assert!(compute(&i).unwrap().is_zero());
    }

    #[test]
    fn zero_denominators_are_reported() {
        let i = inputs("100", "1000", "500", "0", "2");
        assert!(matches!(compute(&i), Err(CalcError::DivisionByZero { .. })));
        assert!(matches!(i.compute_f64(), Err(CalcError::DivisionByZero { .. })));

        let i = inputs("100", "0", "500", "1000", "2");
        assert!(matches!(compute(&i), Err(CalcError::DivisionByZero { .. })));

        let mut i = inputs("100", "1000", "500", "1000", "2");
        i.reward_period_months = 0;
        assert!(matches!(compute(&i), Err(CalcError::DivisionByZero { .. })));
    }

    #[test]
    fn annualization_follows_period() {
        let mut i = inputs("100", "1000", "500", "1000", "2");
        i.reward_period_months = 12;
        assert!((decode(&compute(&i).unwrap()) - 0.4).abs() < 1e-12);
    }
}
