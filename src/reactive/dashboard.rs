use std::collections::BTreeMap;

use serde::Serialize;

use super::{Derived, Reading};
use crate::calc::boost::MAX_BOOST;
use crate::calc::normalize::decode;
use crate::calc::{self, ApyInputs, BoostInputs, BoostResult, REWARD_PERIOD_MONTHS};
use crate::model::amount::{PRICE_DECIMALS, TOKEN_DECIMALS};
use crate::model::{Field, PoolSnapshot, RewardsState, ScaledAmount, UserPosition};

const APY_DEPS: &[Field] = &[
    Field::TotalRewards,
    Field::PoolValueUsd,
    Field::TotalDeposit,
    Field::LpTokenSupply,
    Field::NationPriceUsd,
];

const BOOST_DEPS: &[Field] = &[
    Field::UserDeposit,
    Field::TotalDeposit,
    Field::UserVotingPower,
    Field::TotalVotingPower,
    Field::UserBalance,
];

/// Inputs of the boosted-APY node: the outputs of the two other nodes.
#[derive(Debug, Clone, PartialEq)]
struct BoostedApyInputs {
    base_apy: ScaledAmount,
    multiplier: Option<f64>,
}

/// Reactive aggregate of every value shown on the liquidity-rewards page.
///
/// Feed it upstream updates through [`Dashboard::start_loading`],
/// [`Dashboard::resolve`] and [`Dashboard::fail`]; derived values follow.
#[derive(Debug, Clone)]
pub struct Dashboard {
    reward_period_months: u32,
    sources: BTreeMap<Field, Reading<ScaledAmount>>,
    apy: Derived<ApyInputs, ScaledAmount>,
    boost: Derived<BoostInputs, BoostResult>,
    boosted_apy: Derived<BoostedApyInputs, f64>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(REWARD_PERIOD_MONTHS)
    }
}

impl Dashboard {
    pub fn new(reward_period_months: u32) -> Self {
        Dashboard {
            reward_period_months,
            sources: Field::ALL.iter().map(|f| (*f, Reading::idle())).collect(),
            apy: Derived::new("apy", APY_DEPS, ScaledAmount::zero(TOKEN_DECIMALS)),
            boost: Derived::new("boost", BOOST_DEPS, BoostResult::default()),
            boosted_apy: Derived::new("boosted_apy", &[], 0.0),
        }
    }

    // ── Upstream notifications ──────────────────────────────────────

    pub fn start_loading(&mut self, field: Field) {
        self.source_mut(field).start_loading();
    }

    pub fn resolve(&mut self, field: Field, value: ScaledAmount) {
        self.source_mut(field).resolve(value);
        self.propagate(field);
    }

    pub fn fail(&mut self, field: Field) {
        self.source_mut(field).fail();
    }

    /// Replace a reading wholesale (value and loading flag).
    pub fn set(&mut self, field: Field, reading: Reading<ScaledAmount>) {
        *self.source_mut(field) = reading;
        self.propagate(field);
    }

    fn source_mut(&mut self, field: Field) -> &mut Reading<ScaledAmount> {
        self.sources.entry(field).or_default()
    }

    /// Recompute every node that declared `field` as a dependency, then the
    /// boosted APY if either of its upstream nodes moved.
    fn propagate(&mut self, field: Field) {
        let mut changed = false;
        if self.apy.depends_on(field) {
            let inputs = self.apy_inputs();
            changed |= self.apy.update(inputs, calc::apy::compute);
        }
        if self.boost.depends_on(field) {
            let inputs = self.boost_inputs();
            changed |= self.boost.update(inputs, calc::boost::compute);
        }
        // Recompute order between apy and boost is irrelevant: each reads
        // only its own sources.
        if changed {
            let inputs = BoostedApyInputs {
                base_apy: *self.apy.value(),
                multiplier: self.boost.value().current_boost,
            };
            self.boosted_apy.update(Some(inputs), |i| {
                Ok(boosted_apy(decode(&i.base_apy), i.multiplier))
            });
        }
    }

    // ── Input gathering ─────────────────────────────────────────────

    pub fn value(&self, field: Field) -> Option<ScaledAmount> {
        self.sources.get(&field).and_then(|r| r.value)
    }

    pub fn reading(&self, field: Field) -> Reading<ScaledAmount> {
        self.sources.get(&field).cloned().unwrap_or_default()
    }

    fn apy_inputs(&self) -> Option<ApyInputs> {
        Some(ApyInputs {
            total_rewards: self.value(Field::TotalRewards)?,
            pool_value_usd: self.value(Field::PoolValueUsd)?,
            total_deposit: self.value(Field::TotalDeposit)?,
            lp_token_supply: self.value(Field::LpTokenSupply)?,
            nation_price_usd: self
                .value(Field::NationPriceUsd)
                .unwrap_or(ScaledAmount::zero(PRICE_DECIMALS)),
            reward_period_months: self.reward_period_months,
        })
    }

    fn boost_inputs(&self) -> Option<BoostInputs> {
        Some(BoostInputs {
            user_deposit: self.value(Field::UserDeposit)?,
            total_deposit: self.value(Field::TotalDeposit)?,
            user_voting_power: self.value(Field::UserVotingPower)?,
            total_voting_power: self.value(Field::TotalVotingPower)?,
            user_balance: self.value(Field::UserBalance)?,
        })
    }

    // ── Outputs ─────────────────────────────────────────────────────

    /// True while any upstream read is in flight.
    pub fn loading(&self) -> bool {
        self.sources.values().any(|r| r.loading)
    }

    /// APY ratio with 18 decimals (0.8 = 80%).
    pub fn liquidity_rewards_apy(&self) -> ScaledAmount {
        *self.apy.value()
    }

    pub fn boost(&self) -> BoostResult {
        *self.boost.value()
    }

    /// APY ratio scaled by the user's current boost.
    pub fn boosted_apy(&self) -> f64 {
        *self.boosted_apy.value()
    }

    pub fn pool_snapshot(&self) -> Option<PoolSnapshot> {
        Some(PoolSnapshot {
            pool_value_usd: self.value(Field::PoolValueUsd)?,
            total_deposit: self.value(Field::TotalDeposit)?,
            lp_token_supply: self.value(Field::LpTokenSupply)?,
            nation_price_usd: self.value(Field::NationPriceUsd)?,
        })
    }

    pub fn user_position(&self) -> Option<UserPosition> {
        Some(UserPosition {
            user_deposit: self.value(Field::UserDeposit)?,
            user_balance: self.value(Field::UserBalance)?,
            user_voting_power: self.value(Field::UserVotingPower)?,
        })
    }

    pub fn rewards_state(&self) -> Option<RewardsState> {
        Some(RewardsState {
            total_rewards: self.value(Field::TotalRewards)?,
            unclaimed_rewards: self.value(Field::UnclaimedRewards)?,
        })
    }

    pub fn view(&self) -> DashboardView {
        let decoded = |f: Field| self.value(f).map(|v| decode(&v));
        DashboardView {
            liquidity_rewards_apy: decode(self.apy.value()),
            boosted_apy: self.boosted_apy(),
            unclaimed_rewards: decoded(Field::UnclaimedRewards),
            user_deposit: decoded(Field::UserDeposit),
            total_deposit: decoded(Field::TotalDeposit),
            user_balance: decoded(Field::UserBalance),
            pool_token_balance: decoded(Field::PoolTokenBalance),
            pool_value_usd: decoded(Field::PoolValueUsd),
            nation_price_usd: decoded(Field::NationPriceUsd),
            user_voting_power: decoded(Field::UserVotingPower),
            max_boost: MAX_BOOST,
            boost: self.boost(),
            loading: self.loading(),
        }
    }
}

/// `base_apy * multiplier` when both are non-zero, otherwise `base_apy`.
pub fn boosted_apy(base_apy: f64, multiplier: Option<f64>) -> f64 {
    match multiplier {
        Some(m) if base_apy != 0.0 && m != 0.0 => base_apy * m,
        _ => base_apy,
    }
}

/// Decoded snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// APY ratio (0.8 = 80%).
    pub liquidity_rewards_apy: f64,
    pub boosted_apy: f64,
    pub unclaimed_rewards: Option<f64>,
    pub user_deposit: Option<f64>,
    pub total_deposit: Option<f64>,
    pub user_balance: Option<f64>,
    /// LP tokens in the user's wallet, available to deposit.
    pub pool_token_balance: Option<f64>,
    pub pool_value_usd: Option<f64>,
    pub nation_price_usd: Option<f64>,
    pub user_voting_power: Option<f64>,
    pub max_boost: f64,
    pub boost: BoostResult,
    pub loading: bool,
}
