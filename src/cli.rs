use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Liquidity rewards dashboard: APY and veNATION boost for a boosted
/// LP rewards distributor, plus unsigned deposit/withdraw/claim transactions.
#[derive(Parser)]
#[command(name = "liquidity-rewards", version, about)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema for the config file
    Schema,

    /// Output an example config JSON to stdout
    Example,

    /// Compute a boost from plain token amounts
    Boost {
        /// LP tokens staked by the user
        #[arg(long)]
        user_deposit: f64,

        /// LP tokens staked in the distributor
        #[arg(long)]
        total_deposit: f64,

        /// User's veNATION balance
        #[arg(long)]
        user_ve: f64,

        /// veNATION total supply
        #[arg(long)]
        total_ve: f64,

        /// User's boosted balance as tracked by the distributor
        #[arg(long)]
        user_balance: f64,
    },

    /// Compute the rewards APY from plain amounts
    Apy {
        /// Rewards distributed over one program (NATION)
        #[arg(long)]
        total_rewards: String,

        /// USD value of the whole pool
        #[arg(long)]
        pool_value: String,

        /// LP tokens staked in the distributor
        #[arg(long)]
        total_deposit: String,

        /// LP token total supply
        #[arg(long)]
        lp_supply: String,

        /// NATION price in USD
        #[arg(long)]
        nation_price: String,

        /// Length of one reward program in months
        #[arg(long, default_value = "6")]
        months: u32,

        /// Also show the APY scaled by this boost
        #[arg(long)]
        boost: Option<f64>,
    },

    /// Read the chain and print the dashboard
    Status {
        /// Path to the config JSON file
        config: PathBuf,

        /// Account to show the position of (or LIQUIDITY_REWARDS_ACCOUNT)
        #[arg(long)]
        account: Option<String>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,

        /// Keep polling every poll_interval_secs
        #[arg(long)]
        watch: bool,
    },

    /// Print unsigned transactions for a rewards action
    Intent {
        /// Path to the config JSON file
        config: PathBuf,

        /// Action to prepare
        #[arg(value_enum)]
        action: IntentAction,

        /// LP amount for deposit/withdraw, or "max"
        #[arg(long)]
        amount: Option<String>,

        /// Sender account (or LIQUIDITY_REWARDS_ACCOUNT)
        #[arg(long)]
        account: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IntentAction {
    Claim,
    Deposit,
    Withdraw,
    WithdrawAndClaim,
}
