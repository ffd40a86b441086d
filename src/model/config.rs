use std::path::Path;

use alloy::primitives::{Address, B256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chain::Chain;
use crate::calc::REWARD_PERIOD_MONTHS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid address for `{field}`: `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("Invalid Balancer pool id `{value}` (expected 32-byte hex)")]
    InvalidPoolId { value: String },

    #[error("Chain `{chain}` has no rpc_url")]
    MissingRpcUrl { chain: String },

    #[error("reward_period_months must be at least 1")]
    ZeroRewardPeriod,
}

/// Deployment description of one liquidity-rewards program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RewardsConfig {
    /// Human-readable program name.
    pub name: String,

    /// Chain the contracts live on.
    pub chain: Chain,

    pub contracts: ContractAddresses,

    /// Balancer pool id (bytes32 hex) of the staked LP token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,

    /// Duration of one reward program. Default: 6.
    #[serde(default = "default_reward_period_months")]
    pub reward_period_months: u32,

    /// Where pool value and NATION price come from.
    #[serde(default)]
    pub price_source: PriceSource,

    /// Seconds between refreshes in watch mode. Default: 15.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Contract addresses as hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContractAddresses {
    /// Boosted liquidity rewards distributor.
    pub rewards_distributor: String,
    /// Balancer LP token staked in the distributor.
    pub lp_token: String,
    /// veNATION voting escrow.
    pub ve_token: String,
    /// NATION token (for price lookups).
    pub nation_token: String,
    /// Balancer vault holding the pool balances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balancer_vault: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceSource {
    /// Balancer pool balances priced through DefiLlama.
    #[default]
    Defillama,
    /// Fixed values, for testing and offline use.
    Static {
        pool_value_usd: f64,
        nation_price_usd: f64,
    },
}

fn default_reward_period_months() -> u32 {
    REWARD_PERIOD_MONTHS
}
fn default_poll_interval_secs() -> u64 {
    15
}

/// Resolved, immutable contract parameters passed to every read and intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractSet {
    pub rewards_distributor: Address,
    pub lp_token: Address,
    pub ve_token: Address,
    pub nation_token: Address,
    pub balancer_vault: Option<Address>,
    pub pool_id: Option<B256>,
}

impl RewardsConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RewardsConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.reward_period_months == 0 {
            return Err(ConfigError::ZeroRewardPeriod);
        }
        self.contract_set().map(|_| ())
    }

    pub fn contract_set(&self) -> Result<ContractSet, ConfigError> {
        let c = &self.contracts;
        let pool_id = match &self.pool_id {
            Some(id) => Some(id.parse::<B256>().map_err(|_| ConfigError::InvalidPoolId {
                value: id.clone(),
            })?),
            None => None,
        };
        Ok(ContractSet {
            rewards_distributor: parse_address("rewards_distributor", &c.rewards_distributor)?,
            lp_token: parse_address("lp_token", &c.lp_token)?,
            ve_token: parse_address("ve_token", &c.ve_token)?,
            nation_token: parse_address("nation_token", &c.nation_token)?,
            balancer_vault: c
                .balancer_vault
                .as_deref()
                .map(|v| parse_address("balancer_vault", v))
                .transpose()?,
            pool_id,
        })
    }

    /// RPC endpoint, with `LIQUIDITY_REWARDS_RPC_URL` taking precedence.
    pub fn rpc_url(&self) -> Result<String, ConfigError> {
        if let Ok(url) = std::env::var("LIQUIDITY_REWARDS_RPC_URL") {
            if !url.is_empty() {
                return Ok(url);
            }
        }
        self.chain
            .rpc_url()
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingRpcUrl {
                chain: self.chain.name.clone(),
            })
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "test",
        "chain": { "name": "ethereum", "chain_id": 1, "rpc_url": "http://localhost:8545" },
        "contracts": {
            "rewards_distributor": "0x0000000000000000000000000000000000000001",
            "lp_token": "0x0000000000000000000000000000000000000002",
            "ve_token": "0x0000000000000000000000000000000000000003",
            "nation_token": "0x0000000000000000000000000000000000000004"
        }
    }"#;

    #[test]
    fn defaults_are_applied() {
        let cfg = RewardsConfig::from_json(MINIMAL).unwrap();
        assert_eq!(cfg.reward_period_months, 6);
        assert_eq!(cfg.poll_interval_secs, 15);
        assert_eq!(cfg.price_source, PriceSource::Defillama);
        let set = cfg.contract_set().unwrap();
        assert!(set.balancer_vault.is_none());
        assert!(set.pool_id.is_none());
    }

    #[test]
    fn bad_address_is_rejected() {
        let json = MINIMAL.replace("0x0000000000000000000000000000000000000002", "0xnope");
        match RewardsConfig::from_json(&json) {
            Err(ConfigError::InvalidAddress { field, .. }) => assert_eq!(field, "lp_token"),
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn static_price_source_parses() {
        let json = MINIMAL.replacen(
            "\"name\": \"test\",",
            "\"name\": \"test\", \"price_source\": { \"type\": \"static\", \"pool_value_usd\": 1000000.0, \"nation_price_usd\": 2.5 },",
            1,
        );
        let cfg = RewardsConfig::from_json(&json).unwrap();
        assert_eq!(
            cfg.price_source,
            PriceSource::Static {
                pool_value_usd: 1_000_000.0,
                nation_price_usd: 2.5
            }
        );
    }
}
