use clap::Parser;
use tracing_subscriber::EnvFilter;

use liquidity_rewards::run::{self, IntentKind, StatusConfig};
use liquidity_rewards::{calculate, example, schema};

mod cli;

fn init_logging(verbose: bool) {
    let default = if verbose { "liquidity_rewards=debug" } else { "liquidity_rewards=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::Boost {
            user_deposit,
            total_deposit,
            user_ve,
            total_ve,
            user_balance,
        } => calculate::run_boost(user_deposit, total_deposit, user_ve, total_ve, user_balance),
        cli::Command::Apy {
            total_rewards,
            pool_value,
            total_deposit,
            lp_supply,
            nation_price,
            months,
            boost,
        } => calculate::run_apy(
            &total_rewards,
            &pool_value,
            &total_deposit,
            &lp_supply,
            &nation_price,
            months,
            boost,
        ),
        cli::Command::Status {
            config,
            account,
            json,
            watch,
        } => run::status(&StatusConfig {
            config_path: config,
            account,
            json,
            watch,
        }),
        cli::Command::Intent {
            config,
            action,
            amount,
            account,
        } => {
            let kind = match action {
                cli::IntentAction::Claim => IntentKind::Claim,
                cli::IntentAction::Deposit => IntentKind::Deposit,
                cli::IntentAction::Withdraw => IntentKind::Withdraw,
                cli::IntentAction::WithdrawAndClaim => IntentKind::WithdrawAndClaim,
            };
            run::intent(&config, account.as_deref(), kind, amount.as_deref())
        }
    }
}
