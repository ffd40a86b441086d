use std::fmt;

use serde::Serialize;

use super::amount::{PRICE_DECIMALS, TOKEN_DECIMALS};

/// One on-chain (or price-feed) value the dashboard depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // ── Rewards distributor ──
    TotalRewards,
    UnclaimedRewards,
    UserDeposit,
    TotalDeposit,
    UserBalance,
    // ── LP token ──
    LpTokenSupply,
    PoolTokenBalance,
    // ── Pool / price feed ──
    PoolValueUsd,
    NationPriceUsd,
    // ── veNATION ──
    UserVotingPower,
    TotalVotingPower,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::TotalRewards,
        Field::UnclaimedRewards,
        Field::UserDeposit,
        Field::TotalDeposit,
        Field::UserBalance,
        Field::LpTokenSupply,
        Field::PoolTokenBalance,
        Field::PoolValueUsd,
        Field::NationPriceUsd,
        Field::UserVotingPower,
        Field::TotalVotingPower,
    ];

    /// Reads that take the connected account as argument. They stay idle
    /// while no account is set.
    pub fn needs_account(self) -> bool {
        matches!(
            self,
            Field::UnclaimedRewards
                | Field::UserDeposit
                | Field::UserBalance
                | Field::PoolTokenBalance
                | Field::UserVotingPower
        )
    }

    /// Decimal count the value is delivered with.
    pub fn decimals(self) -> u8 {
        match self {
            Field::NationPriceUsd => PRICE_DECIMALS,
            _ => TOKEN_DECIMALS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::TotalRewards => "total_rewards",
            Field::UnclaimedRewards => "unclaimed_rewards",
            Field::UserDeposit => "user_deposit",
            Field::TotalDeposit => "total_deposit",
            Field::UserBalance => "user_balance",
            Field::LpTokenSupply => "lp_token_supply",
            Field::PoolTokenBalance => "pool_token_balance",
            Field::PoolValueUsd => "pool_value_usd",
            Field::NationPriceUsd => "nation_price_usd",
            Field::UserVotingPower => "user_voting_power",
            Field::TotalVotingPower => "total_voting_power",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
