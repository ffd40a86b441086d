pub mod apy;
pub mod boost;
pub mod normalize;

use thiserror::Error;

pub use apy::{ApyInputs, REWARD_PERIOD_MONTHS};
pub use boost::{BoostInputs, BoostResult};

/// Failures of the derivation layer. None of these are fatal: the reactive
/// layer keeps the last good value when a recompute fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid numeric input `{input}`")]
    InvalidNumericInput { input: String },

    #[error("Decimals {decimals} out of range (max {max})", max = crate::model::amount::MAX_DECIMALS)]
    DecimalsOutOfRange { decimals: u8 },

    #[error("Cannot combine amounts with {left} and {right} decimals")]
    DecimalsMismatch { left: u8, right: u8 },

    #[error("Division by zero: {what} is zero")]
    DivisionByZero { what: &'static str },

    #[error("Arithmetic overflow")]
    Overflow,
}
