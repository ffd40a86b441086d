use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;

use super::ChainDataSource;
use crate::calc::normalize::encode_f64;
use crate::evm::{self, IBoostedLiquidityDistributor, IERC20, IVotingEscrow};
use crate::model::{ContractSet, Field, ScaledAmount};
use crate::price::PriceFeed;

/// Reads distributor, LP token and veNATION state over JSON-RPC.
pub struct EvmSource {
    provider: DynProvider,
    contracts: ContractSet,
    prices: Arc<dyn PriceFeed>,
}

impl EvmSource {
    pub fn new(rpc_url: &str, contracts: ContractSet, prices: Arc<dyn PriceFeed>) -> Result<Self> {
        Ok(EvmSource {
            provider: evm::read_provider(rpc_url)?,
            contracts,
            prices,
        })
    }

    async fn read_raw(&self, field: Field, account: Option<Address>) -> Result<U256> {
        let c = &self.contracts;
        let distributor = IBoostedLiquidityDistributor::new(c.rewards_distributor, &self.provider);
        let lp = IERC20::new(c.lp_token, &self.provider);
        let ve = IVotingEscrow::new(c.ve_token, &self.provider);
        let require_account = || account.with_context(|| format!("{field} needs an account"));

        let raw = match field {
            Field::TotalRewards => distributor.totalRewards().call().await?,
            Field::UnclaimedRewards => distributor.getUnclaimedRewards(require_account()?).call().await?,
            Field::UserDeposit => distributor.userDeposit(require_account()?).call().await?,
            Field::TotalDeposit => distributor.totalDeposit().call().await?,
            Field::UserBalance => distributor.userBalance(require_account()?).call().await?,
            Field::LpTokenSupply => lp.totalSupply().call().await?,
            Field::PoolTokenBalance => lp.balanceOf(require_account()?).call().await?,
            Field::UserVotingPower => ve.balanceOf(require_account()?).call().await?,
            Field::TotalVotingPower => ve.totalSupply().call().await?,
            Field::PoolValueUsd => {
                let value = self.prices.pool_value_usd().await?;
                return Ok(encode_f64(value, field.decimals())?.raw());
            }
            Field::NationPriceUsd => {
                let price = self.prices.nation_price_usd().await?;
                return Ok(encode_f64(price, field.decimals())?.raw());
            }
        };
        Ok(raw)
    }
}

#[async_trait]
impl ChainDataSource for EvmSource {
    async fn read(&self, field: Field, account: Option<Address>) -> Result<ScaledAmount> {
        let raw = self
            .read_raw(field, account)
            .await
            .with_context(|| format!("reading {field}"))?;
        Ok(ScaledAmount::new(raw, field.decimals())?)
    }

    async fn lp_allowance(&self, owner: Address) -> Result<ScaledAmount> {
        let lp = IERC20::new(self.contracts.lp_token, &self.provider);
        let raw = lp
            .allowance(owner, self.contracts.rewards_distributor)
            .call()
            .await
            .context("lp.allowance() failed")?;
        Ok(ScaledAmount::token(raw))
    }
}
