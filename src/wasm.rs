use wasm_bindgen::prelude::*;

use crate::calc::boost::boost_f64;
use crate::calc::{ApyInputs, normalize};
use crate::model::amount::{PRICE_DECIMALS, TOKEN_DECIMALS};

fn error_json(msg: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": msg.to_string() }).to_string()
}

/// Boost for decoded amounts, as `{current_boost, potential_boost, can_boost}`.
#[wasm_bindgen]
pub fn compute_boost(
    user_deposit: f64,
    total_deposit: f64,
    user_ve: f64,
    total_ve: f64,
    user_balance: f64,
) -> String {
    match boost_f64(user_deposit, total_deposit, user_ve, total_ve, user_balance) {
        Ok(result) => serde_json::to_string(&result).unwrap_or_else(error_json),
        Err(e) => error_json(e),
    }
}

/// APY ratio from decimal-string amounts; `{"apy": "0.8"}` on success.
#[wasm_bindgen]
pub fn compute_apy(
    total_rewards: &str,
    pool_value: &str,
    total_deposit: &str,
    lp_supply: &str,
    nation_price: &str,
    months: u32,
) -> String {
    let inputs = (|| {
        Ok::<_, crate::calc::CalcError>(ApyInputs {
            total_rewards: normalize::encode_str(total_rewards, TOKEN_DECIMALS)?,
            pool_value_usd: normalize::encode_str(pool_value, TOKEN_DECIMALS)?,
            total_deposit: normalize::encode_str(total_deposit, TOKEN_DECIMALS)?,
            lp_token_supply: normalize::encode_str(lp_supply, TOKEN_DECIMALS)?,
            nation_price_usd: normalize::encode_str(nation_price, PRICE_DECIMALS)?,
            reward_period_months: months,
        })
    })();
    match inputs.and_then(|i| crate::calc::apy::compute(&i)) {
        Ok(apy) => serde_json::json!({ "apy": apy.to_string() }).to_string(),
        Err(e) => error_json(e),
    }
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
