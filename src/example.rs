use crate::model::Chain;
use crate::model::config::{ContractAddresses, PriceSource, RewardsConfig};

/// Example config for the NATION/WETH Balancer pool on Ethereum mainnet.
/// The distributor address is a placeholder to fill in.
pub fn example_config() -> RewardsConfig {
    RewardsConfig {
        name: "$NATION".to_string(),
        chain: Chain::ethereum(),
        contracts: ContractAddresses {
            rewards_distributor: "0x0000000000000000000000000000000000000000".into(),
            lp_token: "0x0bf37157d30dfe6f56757dcadff01aed83b08cd6".into(),
            ve_token: "0xF7deF1D2FBDA6B74beE7452fdf7894Da9201065d".into(),
            nation_token: "0x333A4823466879eeF910A04D473505da62142069".into(),
            balancer_vault: Some("0xBA12222222228d8Ba445958a75a0704d566BF2C8".into()),
        },
        pool_id: Some(
            "0x0bf37157d30dfe6f56757dcadff01aed83b08cd600020000000000000000019a".into(),
        ),
        reward_period_months: 6,
        price_source: PriceSource::Defillama,
        poll_interval_secs: 15,
    }
}

/// Print the example config JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&example_config())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_round_trips_through_validation() {
        let json = serde_json::to_string(&example_config()).unwrap();
        let cfg = RewardsConfig::from_json(&json).unwrap();
        let set = cfg.contract_set().unwrap();
        assert!(set.pool_id.is_some());
        assert!(set.balancer_vault.is_some());
    }
}
