pub mod calc;
pub mod calculate;
pub mod evm;
pub mod example;
pub mod intent;
pub mod model;
pub mod reactive;
pub mod schema;

#[cfg(feature = "full")]
pub mod price;
#[cfg(feature = "full")]
pub mod run;
#[cfg(feature = "full")]
pub mod source;

#[cfg(feature = "wasm")]
pub mod wasm;
