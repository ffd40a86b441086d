use anyhow::Result;

use crate::calc::boost::{boosted_balance, boost_f64};
use crate::calc::{ApyInputs, normalize};
use crate::model::amount::{PRICE_DECIMALS, TOKEN_DECIMALS};
use crate::reactive::dashboard::boosted_apy;

/// Offline boost computation from decoded values.
pub fn run_boost(
    user_deposit: f64,
    total_deposit: f64,
    user_ve: f64,
    total_ve: f64,
    user_balance: f64,
) -> Result<()> {
    let result = boost_f64(user_deposit, total_deposit, user_ve, total_ve, user_balance)?;
    let boosted = boosted_balance(user_deposit, total_deposit, user_ve, total_ve)?;
    println!("Base balance:    {:.4}", user_deposit * crate::calc::boost::BASE_WEIGHT);
    println!("Boosted balance: {boosted:.4}");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Offline APY computation. Amounts are decimal strings, encoded the same
/// way on-chain reads are.
pub fn run_apy(
    total_rewards: &str,
    pool_value: &str,
    total_deposit: &str,
    lp_supply: &str,
    nation_price: &str,
    months: u32,
    boost: Option<f64>,
) -> Result<()> {
    let inputs = ApyInputs {
        total_rewards: normalize::encode_str(total_rewards, TOKEN_DECIMALS)?,
        pool_value_usd: normalize::encode_str(pool_value, TOKEN_DECIMALS)?,
        total_deposit: normalize::encode_str(total_deposit, TOKEN_DECIMALS)?,
        lp_token_supply: normalize::encode_str(lp_supply, TOKEN_DECIMALS)?,
        nation_price_usd: normalize::encode_str(nation_price, PRICE_DECIMALS)?,
        reward_period_months: months,
    };
    let apy = crate::calc::apy::compute(&inputs)?;
    let ratio = normalize::decode(&apy);
    println!("APY (18-decimal ratio): {apy}");
    println!("APY:                    {:.2}%", ratio * 100.0);
    if let Some(b) = boost {
        println!("Boosted APY:            {:.2}%", boosted_apy(ratio, Some(b)) * 100.0);
    }
    Ok(())
}
