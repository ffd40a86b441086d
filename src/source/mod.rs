pub mod evm;

use alloy::primitives::Address;
use anyhow::Result;
use async_trait::async_trait;

use crate::model::{Field, ScaledAmount};

pub use evm::EvmSource;

/// Read access to every upstream value of the dashboard.
///
/// Implementations return amounts with [`Field::decimals`] decimals.
/// `account` is always `Some` for fields where [`Field::needs_account`].
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    async fn read(&self, field: Field, account: Option<Address>) -> Result<ScaledAmount>;

    /// LP allowance granted by `owner` to the rewards distributor.
    async fn lp_allowance(&self, owner: Address) -> Result<ScaledAmount>;
}
