use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use anyhow::Result;

// ── Contract interfaces ────────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IBoostedLiquidityDistributor {
        function totalRewards() external view returns (uint256);
        function getUnclaimedRewards(address account) external view returns (uint256);
        function userDeposit(address account) external view returns (uint256);
        function totalDeposit() external view returns (uint256);
        function userBalance(address account) external view returns (uint256);

        function claimRewards() external;
        function deposit(uint256 amount) external;
        function withdraw(uint256 amount) external;
        function withdrawAndClaim() external;
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}

sol! {
    /// veNATION voting escrow. Balances decay over time.
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IVotingEscrow {
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IBalancerVault {
        function getPoolTokens(bytes32 poolId) external view returns (
            address[] tokens,
            uint256[] balances,
            uint256 lastChangeBlock
        );
    }
}

// ── Provider factory ───────────────────────────────────────────────

/// Read-only HTTP provider.
pub fn read_provider(rpc_url: &str) -> Result<DynProvider> {
    let url = rpc_url
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid RPC URL `{rpc_url}`: {e}"))?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Format an address for display (shortened).
pub fn short_addr(addr: &Address) -> String {
    let s = format!("{addr}");
    if s.len() > 10 {
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_addr_keeps_prefix_and_suffix() {
        let addr = Address::repeat_byte(0x11);
        assert_eq!(short_addr(&addr), "0x1111...1111");
    }

    #[test]
    fn bad_rpc_url_is_rejected() {
        assert!(read_provider("not a url").is_err());
    }
}
