//! Write-intents for the rewards distributor.
//!
//! An intent is rendered as an unsigned [`TransactionRequest`]; signing and
//! submission belong to whichever wallet picks it up.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use serde::Serialize;

use crate::calc::CalcError;
use crate::calc::normalize::encode_str;
use crate::evm::{IBoostedLiquidityDistributor, IERC20};
use crate::model::ContractSet;
use crate::model::amount::{ScaledAmount, TOKEN_DECIMALS};

/// Gas limit attached to claim, deposit and withdraw-and-claim.
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    ClaimRewards,
    Deposit { amount: U256 },
    Withdraw { amount: U256 },
    WithdrawAndClaim,
    /// Let the distributor pull LP tokens ahead of a deposit.
    ApproveLp { amount: U256 },
}

impl Intent {
    pub fn gas_limit(&self) -> Option<u64> {
        match self {
            Intent::ClaimRewards | Intent::Deposit { .. } | Intent::WithdrawAndClaim => {
                Some(DEFAULT_GAS_LIMIT)
            }
            Intent::Withdraw { .. } | Intent::ApproveLp { .. } => None,
        }
    }

    pub fn target(&self, contracts: &ContractSet) -> Address {
        match self {
            Intent::ApproveLp { .. } => contracts.lp_token,
            _ => contracts.rewards_distributor,
        }
    }

    pub fn calldata(&self, contracts: &ContractSet) -> Bytes {
        let encoded = match *self {
            Intent::ClaimRewards => IBoostedLiquidityDistributor::claimRewardsCall {}.abi_encode(),
            Intent::Deposit { amount } => {
                IBoostedLiquidityDistributor::depositCall { amount }.abi_encode()
            }
            Intent::Withdraw { amount } => {
                IBoostedLiquidityDistributor::withdrawCall { amount }.abi_encode()
            }
            Intent::WithdrawAndClaim => {
                IBoostedLiquidityDistributor::withdrawAndClaimCall {}.abi_encode()
            }
            Intent::ApproveLp { amount } => IERC20::approveCall {
                spender: contracts.rewards_distributor,
                amount,
            }
            .abi_encode(),
        };
        Bytes::from(encoded)
    }

    /// Unsigned transaction for this intent.
    pub fn to_request(&self, contracts: &ContractSet, from: Option<Address>) -> TransactionRequest {
        let mut tx = TransactionRequest::default()
            .with_to(self.target(contracts))
            .with_input(self.calldata(contracts));
        if let Some(from) = from {
            tx = tx.with_from(from);
        }
        if let Some(gas) = self.gas_limit() {
            tx = tx.with_gas_limit(gas);
        }
        tx
    }
}

/// Intents needed to deposit `amount`, approval first when the current
/// allowance does not cover it.
pub fn deposit_plan(amount: U256, allowance: U256) -> Vec<Intent> {
    let mut plan = Vec::with_capacity(2);
    if needs_approval(allowance, amount) {
        plan.push(Intent::ApproveLp { amount });
    }
    plan.push(Intent::Deposit { amount });
    plan
}

pub fn needs_approval(allowance: U256, amount: U256) -> bool {
    allowance < amount
}

/// Parse a user-typed amount. `"max"` selects `max` (wallet balance for
/// deposits, staked deposit for withdrawals); an empty string is zero.
pub fn parse_amount(input: &str, max: Option<ScaledAmount>) -> Result<ScaledAmount, CalcError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(ScaledAmount::zero(TOKEN_DECIMALS));
    }
    if input.eq_ignore_ascii_case("max") {
        return max.ok_or_else(|| CalcError::InvalidNumericInput {
            input: input.to_string(),
        });
    }
    encode_str(input, TOKEN_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn gas_limits_match_actions() {
        assert_eq!(Intent::ClaimRewards.gas_limit(), Some(300_000));
        assert_eq!(Intent::Deposit { amount: U256::from(1u64) }.gas_limit(), Some(300_000));
        assert_eq!(Intent::WithdrawAndClaim.gas_limit(), Some(300_000));
        assert_eq!(Intent::Withdraw { amount: U256::from(1u64) }.gas_limit(), None);
    }

    #[test]
    fn deposit_calldata_uses_selector_and_amount() {
        let amount = U256::from(1_000_000_000_000_000_000u128);
        let data = Intent::Deposit { amount }.calldata(&contracts());
        assert_eq!(&data[..4], IBoostedLiquidityDistributor::depositCall::SELECTOR.as_slice());
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(U256::from_be_slice(&data[4..]), amount);
    }

    #[test]
    fn approval_targets_lp_token() {
        let c = contracts();
        let approve = Intent::ApproveLp { amount: U256::from(5u64) };
        assert_eq!(approve.target(&c), c.lp_token);
        assert_eq!(Intent::ClaimRewards.target(&c), c.rewards_distributor);
    }

    #[test]
    fn request_carries_gas_and_sender() {
        let c = contracts();
        let from = Address::repeat_byte(0x55);
        let tx = Intent::ClaimRewards.to_request(&c, Some(from));
        assert_eq!(tx.gas, Some(300_000));
        assert_eq!(tx.from, Some(from));
        let tx = Intent::Withdraw { amount: U256::from(1u64) }.to_request(&c, None);
        assert_eq!(tx.gas, None);
    }

    #[test]
    fn deposit_plan_adds_approval_when_needed() {
        let amount = U256::from(100u64);
        assert_eq!(
            deposit_plan(amount, U256::from(10u64)),
            vec![Intent::ApproveLp { amount }, Intent::Deposit { amount }]
        );
        assert_eq!(deposit_plan(amount, amount), vec![Intent::Deposit { amount }]);
    }

    #[test]
    fn amounts_parse_like_ether_units() {
        let max = encode_str("42.5", TOKEN_DECIMALS).unwrap();
        assert_eq!(parse_amount("", None).unwrap(), ScaledAmount::zero(18));
        assert_eq!(parse_amount("MAX", Some(max)).unwrap(), max);
        assert!(parse_amount("max", None).is_err());
        assert_eq!(
            parse_amount("1.5", None).unwrap().raw(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert!(parse_amount("abc", None).is_err());
    }
}
