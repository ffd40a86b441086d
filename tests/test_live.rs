use std::sync::Arc;

use liquidity_rewards::example::example_config;
use liquidity_rewards::model::Field;
use liquidity_rewards::price::StaticPrices;
use liquidity_rewards::reactive::Dashboard;
use liquidity_rewards::run::poller::refresh;
use liquidity_rewards::source::EvmSource;

// ── Constants ────────────────────────────────────────────────────────

const ETHEREUM_RPC: &str = "https://eth.llamarpc.com";

// ── Tests ────────────────────────────────────────────────────────────

/// Reads the pool-wide LP and veNATION supplies from mainnet.
#[tokio::test]
#[ignore] // Requires network access
async fn test_live_pool_reads() {
    let config = example_config();
    let contracts = config.contract_set().unwrap();
    let rpc = std::env::var("LIQUIDITY_REWARDS_RPC_URL").unwrap_or_else(|_| ETHEREUM_RPC.into());
    let prices = Arc::new(StaticPrices {
        pool_value_usd: 1_000_000.0,
        nation_price_usd: 10.0,
    });
    let source = Arc::new(EvmSource::new(&rpc, contracts, prices).unwrap());

    let mut dashboard = Dashboard::default();
    let stats = refresh(source, None, &mut dashboard).await;
    println!("{stats:?}");
    assert!(!dashboard.loading());

    let lp_supply = dashboard.value(Field::LpTokenSupply).expect("LP supply");
    let ve_supply = dashboard.value(Field::TotalVotingPower).expect("veNATION supply");
    assert!(!lp_supply.is_zero());
    assert!(!ve_supply.is_zero());
    println!("LP supply: {lp_supply}, veNATION supply: {ve_supply}");
}
