pub mod defillama;

use std::future::Future;
use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::model::ContractSet;
use crate::model::config::{PriceSource, RewardsConfig};

pub use defillama::BalancerLlamaFeed;

/// Pool valuation and NATION price, both in USD.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Total USD value of the Balancer pool backing the LP token.
    async fn pool_value_usd(&self) -> Result<f64>;

    async fn nation_price_usd(&self) -> Result<f64>;
}

/// Fixed prices from config.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrices {
    pub pool_value_usd: f64,
    pub nation_price_usd: f64,
}

#[async_trait]
impl PriceFeed for StaticPrices {
    async fn pool_value_usd(&self) -> Result<f64> {
        Ok(self.pool_value_usd)
    }

    async fn nation_price_usd(&self) -> Result<f64> {
        Ok(self.nation_price_usd)
    }
}

/// Build the feed selected by `config.price_source`.
pub fn build(config: &RewardsConfig, contracts: &ContractSet) -> Result<Arc<dyn PriceFeed>> {
    match &config.price_source {
        PriceSource::Static {
            pool_value_usd,
            nation_price_usd,
        } => Ok(Arc::new(StaticPrices {
            pool_value_usd: *pool_value_usd,
            nation_price_usd: *nation_price_usd,
        })),
        PriceSource::Defillama => {
            let (Some(vault), Some(pool_id)) = (contracts.balancer_vault, contracts.pool_id)
            else {
                bail!(
                    "price_source `defillama` needs contracts.balancer_vault and pool_id \
                     to value the pool"
                );
            };
            let feed = BalancerLlamaFeed::new(
                &config.rpc_url()?,
                config.chain.llama_slug(),
                vault,
                pool_id,
                contracts.nation_token,
            )?;
            Ok(Arc::new(feed))
        }
    }
}

/// Retry an async operation with exponential backoff (1s, 2s, 4s, ...).
pub async fn retry<T, F, Fut>(max_retries: u32, f: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match f().await {
            Ok(val) => return Ok(val),
            Err(e) if attempt >= max_retries => return Err(e),
            Err(e) => {
                tracing::debug!(attempt, error = %e, "retrying");
                let delay = std::time::Duration::from_millis(1000 * 2u64.pow(attempt));
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
