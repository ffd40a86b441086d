pub mod config;
pub mod poller;
pub mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use anyhow::{Context, Result, bail};

use crate::calc::normalize::decode;
use crate::evm;
use crate::intent::{self, Intent};
use crate::model::Field;
use crate::price;
use crate::reactive::Dashboard;
use crate::source::{ChainDataSource, EvmSource};

use config::RuntimeConfig;

/// CLI-facing options of the `status` command.
pub struct StatusConfig {
    pub config_path: PathBuf,
    pub account: Option<String>,
    pub json: bool,
    pub watch: bool,
}

/// Which write-intent the `intent` command should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Claim,
    Deposit,
    Withdraw,
    WithdrawAndClaim,
}

/// Entry point for the `status` command.
pub fn status(cli: &StatusConfig) -> Result<()> {
    let config = RuntimeConfig::load(&cli.config_path, cli.account.as_deref())?;
    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    rt.block_on(status_async(config, cli.json, cli.watch))
}

fn build_source(config: &RuntimeConfig) -> Result<Arc<dyn ChainDataSource>> {
    let prices = price::build(&config.rewards, &config.contracts)?;
    let source = EvmSource::new(&config.rpc_url, config.contracts, prices)?;
    Ok(Arc::new(source))
}

async fn status_async(config: RuntimeConfig, json: bool, watch: bool) -> Result<()> {
    let source = build_source(&config)?;
    let mut dashboard = Dashboard::new(config.rewards.reward_period_months);
    let interval = Duration::from_secs(config.rewards.poll_interval_secs.max(1));

    if !json {
        report::print_header(&config);
    }

    loop {
        let stats = poller::refresh(Arc::clone(&source), config.account, &mut dashboard).await;
        tracing::info!(
            resolved = stats.resolved,
            failed = stats.failed,
            skipped = stats.skipped,
            "refresh complete"
        );

        let view = dashboard.view();
        if json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            report::print_view(&view, chrono::Utc::now());
        }

        if !watch {
            return Ok(());
        }
        tokio::time::sleep(interval).await;
    }
}

/// Entry point for the `intent` command: print unsigned transactions.
pub fn intent(config_path: &Path, account: Option<&str>, kind: IntentKind, amount: Option<&str>) -> Result<()> {
    let config = RuntimeConfig::load(config_path, account)?;
    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    let plan = rt.block_on(plan_intents(&config, kind, amount))?;

    for step in &plan {
        let tx = step.to_request(&config.contracts, config.account);
        tracing::info!(
            intent = ?step,
            to = %evm::short_addr(&step.target(&config.contracts)),
            "intent prepared"
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "intent": step,
                "transaction": tx,
            }))?
        );
    }
    Ok(())
}

async fn plan_intents(
    config: &RuntimeConfig,
    kind: IntentKind,
    amount: Option<&str>,
) -> Result<Vec<Intent>> {
    let amount = amount.unwrap_or("");
    if !needs_chain(kind, amount) {
        return plan(None, config.account, kind, amount).await;
    }
    if config.account.is_none() {
        bail!("--account (or LIQUIDITY_REWARDS_ACCOUNT) is required for {kind:?} with approval or max");
    }
    let source = build_source(config)?;
    plan(Some(source.as_ref()), config.account, kind, amount).await
}

/// Whether planning `kind` with `amount` has to read the chain.
pub fn needs_chain(kind: IntentKind, amount: &str) -> bool {
    match kind {
        IntentKind::Claim | IntentKind::WithdrawAndClaim => false,
        IntentKind::Deposit => true,
        IntentKind::Withdraw => amount.trim().eq_ignore_ascii_case("max"),
    }
}

/// Turn a CLI action into the ordered transactions to sign.
///
/// Deposits are preceded by an LP approval when the allowance is short.
/// `source` is required whenever [`needs_chain`] holds.
pub async fn plan(
    source: Option<&dyn ChainDataSource>,
    account: Option<Address>,
    kind: IntentKind,
    amount: &str,
) -> Result<Vec<Intent>> {
    match kind {
        IntentKind::Claim => return Ok(vec![Intent::ClaimRewards]),
        IntentKind::WithdrawAndClaim => return Ok(vec![Intent::WithdrawAndClaim]),
        IntentKind::Deposit | IntentKind::Withdraw => {}
    }

    let max = if amount.trim().eq_ignore_ascii_case("max") {
        let Some(source) = source else {
            bail!("reading the max {kind:?} amount needs a chain source");
        };
        let field = match kind {
            IntentKind::Deposit => Field::PoolTokenBalance,
            _ => Field::UserDeposit,
        };
        Some(source.read(field, account).await?)
    } else {
        None
    };
    let amount = intent::parse_amount(amount, max)?;
    eprintln!("Amount: {} LP ({:.4})", amount, decode(&amount));

    if kind == IntentKind::Withdraw {
        return Ok(vec![Intent::Withdraw {
            amount: amount.raw(),
        }]);
    }
    let (Some(source), Some(owner)) = (source, account) else {
        bail!("deposit planning needs a chain source and an account");
    };
    let allowance = source.lp_allowance(owner).await?;
    Ok(intent::deposit_plan(amount.raw(), allowance.raw()))
}
