use super::amount::ScaledAmount;

/// Pool-wide values used by the APY computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSnapshot {
    pub pool_value_usd: ScaledAmount,
    pub total_deposit: ScaledAmount,
    pub lp_token_supply: ScaledAmount,
    /// Two-decimal price.
    pub nation_price_usd: ScaledAmount,
}

/// Per-account staking position.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPosition {
    pub user_deposit: ScaledAmount,
    /// Boosted effective balance as tracked by the distributor.
    pub user_balance: ScaledAmount,
    pub user_voting_power: ScaledAmount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewardsState {
    pub total_rewards: ScaledAmount,
    pub unclaimed_rewards: ScaledAmount,
}
