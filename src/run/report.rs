use chrono::{DateTime, Utc};

use super::config::RuntimeConfig;
use crate::evm::short_addr;
use crate::reactive::DashboardView;

pub fn print_header(config: &RuntimeConfig) {
    println!("=== {} liquidity rewards ===", config.rewards.name);
    println!("Chain:       {}", config.rewards.chain);
    println!("Distributor: {}", short_addr(&config.contracts.rewards_distributor));
    println!("LP token:    {}", short_addr(&config.contracts.lp_token));
    match &config.account {
        Some(a) => println!("Account:     {}", short_addr(a)),
        None => println!("Account:     (none, pool-wide values only)"),
    }
    println!();
}

pub fn print_view(view: &DashboardView, at: DateTime<Utc>) {
    println!("── {} ──", at.format("%Y-%m-%d %H:%M:%S UTC"));
    if view.loading {
        println!("(some values still loading)");
    }
    println!("Total liquidity:    {}", opt(view.pool_value_usd.map(millions)));
    println!("Current APY:        {}", percent(view.liquidity_rewards_apy));
    println!("Your boosted APY:   {}", percent(view.boosted_apy));
    println!("Your veNATION:      {}", opt(view.user_voting_power.map(|v| format!("{v:.4}"))));
    println!("Your rewards:       {}", opt(view.unclaimed_rewards.map(|v| format!("{v:.2} NATION"))));
    println!("Available to stake: {}", opt(view.pool_token_balance.map(|v| format!("{v:.4} LP"))));
    println!("Staked:             {}", opt(view.user_deposit.map(|v| format!("{v:.4} LP"))));

    let boost = &view.boost;
    match (boost.current_boost, boost.potential_boost) {
        (Some(current), Some(potential)) => {
            println!("Boost:              {current:.2}x (potential {potential:.2}x, max {:.1}x)", view.max_boost);
            if boost.can_boost {
                println!("                    checkpoint to raise your boost");
            }
        }
        _ => println!("Boost:              - (up to {:.1}x with veNATION)", view.max_boost),
    }
    println!();
}

/// Ratio → percentage with two decimals.
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// USD amount in millions ("$1.23M").
pub fn millions(usd: f64) -> String {
    format!("${:.2}M", usd / 1_000_000.0)
}

fn opt(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
