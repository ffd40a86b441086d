use std::collections::HashMap;

use alloy::primitives::{Address, B256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{PriceFeed, retry};
use crate::calc::normalize::decode_raw;
use crate::evm::{self, IBalancerVault, IERC20};

const PRICES_URL: &str = "https://coins.llama.fi/prices/current";

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PricesResponse {
    coins: HashMap<String, CoinPrice>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CoinPrice {
    price: f64,
    symbol: Option<String>,
    decimals: Option<u8>,
    timestamp: Option<u64>,
}

// ── Feed ─────────────────────────────────────────────────────────────

/// Values a Balancer pool from its vault balances and DefiLlama spot prices.
pub struct BalancerLlamaFeed {
    provider: DynProvider,
    client: reqwest::Client,
    chain_slug: String,
    vault: Address,
    pool_id: B256,
    nation_token: Address,
}

impl BalancerLlamaFeed {
    pub fn new(
        rpc_url: &str,
        chain_slug: String,
        vault: Address,
        pool_id: B256,
        nation_token: Address,
    ) -> Result<Self> {
        Ok(BalancerLlamaFeed {
            provider: evm::read_provider(rpc_url)?,
            client: reqwest::Client::new(),
            chain_slug,
            vault,
            pool_id,
            nation_token,
        })
    }

    fn coin_key(&self, token: &Address) -> String {
        coin_key(&self.chain_slug, token)
    }

    async fn prices(&self, tokens: &[Address]) -> Result<HashMap<Address, f64>> {
        let keys: Vec<String> = tokens.iter().map(|t| self.coin_key(t)).collect();
        let url = format!("{PRICES_URL}/{}", keys.join(","));
        let resp = retry(3, || {
            let client = self.client.clone();
            let url = url.clone();
            async move {
                let r = client
                    .get(&url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<PricesResponse>()
                    .await?;
                Ok(r)
            }
        })
        .await
        .context("fetching DefiLlama prices")?;

        Ok(match_prices(&self.chain_slug, tokens, &resp.coins))
    }
}

#[async_trait]
impl PriceFeed for BalancerLlamaFeed {
    async fn pool_value_usd(&self) -> Result<f64> {
        let vault = IBalancerVault::new(self.vault, &self.provider);
        let pool = vault
            .getPoolTokens(self.pool_id)
            .call()
            .await
            .context("vault.getPoolTokens() failed")?;

        let prices = self.prices(&pool.tokens).await?;
        let mut total = 0.0;
        for (token, balance) in pool.tokens.iter().zip(pool.balances.iter()) {
            let Some(price) = prices.get(token) else {
                tracing::warn!(token = %evm::short_addr(token), "no price for pool token, skipping");
                continue;
            };
            let decimals = IERC20::new(*token, &self.provider)
                .decimals()
                .call()
                .await
                .with_context(|| format!("decimals() failed for {}", evm::short_addr(token)))?;
            total += decode_raw(*balance, decimals) * price;
        }
        Ok(total)
    }

    async fn nation_price_usd(&self) -> Result<f64> {
        let prices = self.prices(&[self.nation_token]).await?;
        prices
            .get(&self.nation_token)
            .copied()
            .with_context(|| format!("DefiLlama has no price for {}", self.coin_key(&self.nation_token)))
    }
}

fn coin_key(chain_slug: &str, token: &Address) -> String {
    format!("{chain_slug}:{token:#x}")
}

/// DefiLlama echoes keys in its own casing; match them case-insensitively.
fn match_prices(
    chain_slug: &str,
    tokens: &[Address],
    coins: &HashMap<String, CoinPrice>,
) -> HashMap<Address, f64> {
    let by_key: HashMap<String, f64> = coins
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.price))
        .collect();
    tokens
        .iter()
        .filter_map(|t| {
            let key = coin_key(chain_slug, t).to_lowercase();
            by_key.get(&key).map(|p| (*t, *p))
        })
        .collect()
}
