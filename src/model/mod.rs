pub mod amount;
pub mod chain;
pub mod config;
pub mod field;
pub mod snapshot;

pub use amount::ScaledAmount;
pub use chain::Chain;
pub use config::{ContractSet, RewardsConfig};
pub use field::Field;
pub use snapshot::{PoolSnapshot, RewardsState, UserPosition};
