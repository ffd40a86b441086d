//! veNATION reward boost.
//!
//! 40% of a deposit always earns rewards. The remaining 60% is unlocked in
//! proportion to the user's share of veNATION supply, applied to the whole
//! pool's deposits:
//!
//! ```text
//! base    = userDeposit * 0.4
//! boosted = min(base + totalDeposit * userVe / totalVe * 0.6, userDeposit)
//! ```
//!
//! Boosts are expressed relative to `base`, so the ceiling is `1 / 0.4 = 2.5x`.

use serde::Serialize;

use super::CalcError;
use super::normalize::decode;
use crate::model::amount::ScaledAmount;

/// Share of a deposit that earns rewards without any voting power.
pub const BASE_WEIGHT: f64 = 0.4;

/// Share of a deposit unlocked by voting power.
pub const BOOST_WEIGHT: f64 = 0.6;

/// Highest achievable boost multiplier.
pub const MAX_BOOST: f64 = 1.0 / BASE_WEIGHT;

/// Complete input set for one boost computation, as read from chain.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostInputs {
    pub user_deposit: ScaledAmount,
    pub total_deposit: ScaledAmount,
    pub user_voting_power: ScaledAmount,
    pub total_voting_power: ScaledAmount,
    pub user_balance: ScaledAmount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoostResult {
    /// Boost currently applied to the user's balance, never below 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_boost: Option<f64>,
    /// Boost the user would get at their current voting power.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_boost: Option<f64>,
    /// True when checkpointing would raise the boost by at least 0.1x.
    pub can_boost: bool,
}

/// Effective balance the user is entitled to at their current voting power.
pub fn boosted_balance(
    user_deposit: f64,
    total_deposit: f64,
    user_voting_power: f64,
    total_voting_power: f64,
) -> Result<f64, CalcError> {
    if total_voting_power == 0.0 {
        return Err(CalcError::DivisionByZero {
            what: "veNATION supply",
        });
    }
    let base = user_deposit * BASE_WEIGHT;
    let boosted = base + (total_deposit * user_voting_power / total_voting_power) * BOOST_WEIGHT;
    Ok(boosted.min(user_deposit))
}

/// Improvement counts only when it moves the boost's first decimal.
pub fn can_boost(potential_boost: f64, current_boost: f64) -> bool {
    (potential_boost * 10.0).trunc() > (current_boost * 10.0).trunc()
}

/// Compute the boost on decoded float values.
pub fn boost_f64(
    user_deposit: f64,
    total_deposit: f64,
    user_voting_power: f64,
    total_voting_power: f64,
    user_balance: f64,
) -> Result<BoostResult, CalcError> {
    let base = user_deposit * BASE_WEIGHT;
    if base == 0.0 {
        return Err(CalcError::DivisionByZero {
            what: "base balance",
        });
    }
    let boosted = boosted_balance(
        user_deposit,
        total_deposit,
        user_voting_power,
        total_voting_power,
    )?;

    let potential = boosted / base;
    let current = user_balance / base;

    tracing::debug!(
        current_boost = current,
        potential_boost = potential,
        "boost computed"
    );

    Ok(BoostResult {
        current_boost: Some(current.max(1.0)),
        potential_boost: Some(potential),
        can_boost: can_boost(potential, current),
    })
}

/// Decode the on-chain reads and compute the boost.
pub fn compute(inputs: &BoostInputs) -> Result<BoostResult, CalcError> {
    boost_f64(
        decode(&inputs.user_deposit),
        decode(&inputs.total_deposit),
        decode(&inputs.user_voting_power),
        decode(&inputs.total_voting_power),
        decode(&inputs.user_balance),
    )
}
