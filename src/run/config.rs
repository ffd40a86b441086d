use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};

use crate::model::{ContractSet, RewardsConfig};

/// Runtime configuration shared by the `status` and `intent` commands.
pub struct RuntimeConfig {
    pub rewards: RewardsConfig,
    pub contracts: ContractSet,
    pub rpc_url: String,
    pub account: Option<Address>,
}

impl RuntimeConfig {
    /// Load the config file and resolve the account from `--account` or
    /// the `LIQUIDITY_REWARDS_ACCOUNT` env var.
    pub fn load(config_path: &Path, account: Option<&str>) -> Result<Self> {
        let rewards = RewardsConfig::load(config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?;
        let contracts = rewards.contract_set()?;
        let rpc_url = rewards.rpc_url()?;

        let account = match account {
            Some(a) => Some(a.to_string()),
            None => std::env::var("LIQUIDITY_REWARDS_ACCOUNT").ok().filter(|a| !a.is_empty()),
        };
        let account = account
            .map(|a| {
                a.parse::<Address>()
                    .map_err(|e| anyhow::anyhow!("Invalid account address `{a}`: {e}"))
            })
            .transpose()?;

        Ok(RuntimeConfig {
            rewards,
            contracts,
            rpc_url,
            account,
        })
    }
}
