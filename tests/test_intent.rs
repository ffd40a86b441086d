use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use anyhow::{Result, bail};
use async_trait::async_trait;

use liquidity_rewards::calc::normalize::encode_str;
use liquidity_rewards::evm::{IBoostedLiquidityDistributor, IERC20};
use liquidity_rewards::intent::{DEFAULT_GAS_LIMIT, Intent};
use liquidity_rewards::model::{ContractSet, Field, ScaledAmount};
use liquidity_rewards::run::{IntentKind, needs_chain, plan};
use liquidity_rewards::source::ChainDataSource;

/// Wallet with a fixed LP balance, staked deposit and allowance.
struct MockWallet {
    lp_balance: ScaledAmount,
    deposit: ScaledAmount,
    allowance: ScaledAmount,
}

impl MockWallet {
    fn new(lp_balance: &str, deposit: &str, allowance: &str) -> Self {
        MockWallet {
            lp_balance: encode_str(lp_balance, 18).unwrap(),
            deposit: encode_str(deposit, 18).unwrap(),
            allowance: encode_str(allowance, 18).unwrap(),
        }
    }
}

#[async_trait]
impl ChainDataSource for MockWallet {
    async fn read(&self, field: Field, account: Option<Address>) -> Result<ScaledAmount> {
        if account.is_none() {
            bail!("no account");
        }
        match field {
            Field::PoolTokenBalance => Ok(self.lp_balance),
            Field::UserDeposit => Ok(self.deposit),
            other => bail!("unexpected read of {other}"),
        }
    }

    async fn lp_allowance(&self, _owner: Address) -> Result<ScaledAmount> {
        Ok(self.allowance)
    }
}

fn owner() -> Option<Address> {
    Some(Address::repeat_byte(0x42))
}

fn contracts() -> ContractSet {
    ContractSet {
        rewards_distributor: Address::repeat_byte(0x11),
        lp_token: Address::repeat_byte(0x22),
        ve_token: Address::repeat_byte(0x33),
        nation_token: Address::repeat_byte(0x44),
        balancer_vault: None,
        pool_id: None,
    }
}

fn lp(s: &str) -> U256 {
    encode_str(s, 18).unwrap().raw()
}

#[test]
fn test_needs_chain() {
    assert!(!needs_chain(IntentKind::Claim, ""));
    assert!(!needs_chain(IntentKind::WithdrawAndClaim, "max"));
    assert!(!needs_chain(IntentKind::Withdraw, "1.5"));
    assert!(needs_chain(IntentKind::Withdraw, " MAX "));
    assert!(needs_chain(IntentKind::Deposit, "1"));
}

#[tokio::test]
async fn test_claim_needs_no_source() {
    let steps = plan(None, None, IntentKind::Claim, "").await.unwrap();
    assert_eq!(steps, vec![Intent::ClaimRewards]);

    let tx = steps[0].to_request(&contracts(), owner());
    assert_eq!(tx.to, Some(Address::repeat_byte(0x11).into()));
    assert_eq!(tx.gas, Some(DEFAULT_GAS_LIMIT));
    let input = tx.input.input().unwrap();
    assert_eq!(&input[..4], IBoostedLiquidityDistributor::claimRewardsCall::SELECTOR.as_slice());
}

#[tokio::test]
async fn test_withdraw_explicit_amount() {
    let steps = plan(None, owner(), IntentKind::Withdraw, "2.5").await.unwrap();
    assert_eq!(steps, vec![Intent::Withdraw { amount: lp("2.5") }]);
    // Withdraw leaves gas estimation to the wallet.
    let tx = steps[0].to_request(&contracts(), owner());
    assert_eq!(tx.gas, None);
}

#[tokio::test]
async fn test_withdraw_max_uses_staked_deposit() {
    let wallet = MockWallet::new("3", "7.25", "0");
    let steps = plan(Some(&wallet), owner(), IntentKind::Withdraw, "max")
        .await
        .unwrap();
    assert_eq!(steps, vec![Intent::Withdraw { amount: lp("7.25") }]);
}

#[tokio::test]
async fn test_deposit_with_enough_allowance() {
    let wallet = MockWallet::new("3", "0", "10");
    let steps = plan(Some(&wallet), owner(), IntentKind::Deposit, "2")
        .await
        .unwrap();
    assert_eq!(steps, vec![Intent::Deposit { amount: lp("2") }]);
}

#[tokio::test]
async fn test_deposit_max_approves_first() {
    let wallet = MockWallet::new("3", "0", "1");
    let steps = plan(Some(&wallet), owner(), IntentKind::Deposit, "max")
        .await
        .unwrap();
    assert_eq!(
        steps,
        vec![
            Intent::ApproveLp { amount: lp("3") },
            Intent::Deposit { amount: lp("3") },
        ]
    );

    // The approval goes to the LP token and names the distributor as spender.
    let approve = steps[0].to_request(&contracts(), owner());
    assert_eq!(approve.to, Some(Address::repeat_byte(0x22).into()));
    let decoded = IERC20::approveCall::abi_decode(approve.input.input().unwrap()).unwrap();
    assert_eq!(decoded.spender, Address::repeat_byte(0x11));
    assert_eq!(decoded.amount, lp("3"));
}

#[tokio::test]
async fn test_deposit_without_source_fails() {
    assert!(plan(None, owner(), IntentKind::Deposit, "1").await.is_err());
    assert!(plan(None, owner(), IntentKind::Withdraw, "max").await.is_err());
}

#[tokio::test]
async fn test_invalid_amount_rejected() {
    let err = plan(None, owner(), IntentKind::Withdraw, "-1").await.unwrap_err();
    assert!(format!("{err:#}").contains("-1"), "{err:#}");
}
