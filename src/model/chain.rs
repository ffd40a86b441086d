use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An EVM chain the rewards contracts are deployed on.
///
/// In JSON: `{"name": "ethereum", "chain_id": 1, "rpc_url": "https://eth.llamarpc.com"}`.
/// `chain_id`/`rpc_url` may be omitted for known chain names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Chain {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl Chain {
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id.or_else(|| Self::known(&self.name).and_then(|c| c.chain_id))
    }

    pub fn rpc_url(&self) -> Option<&str> {
        match &self.rpc_url {
            Some(url) => Some(url.as_str()),
            None => Self::known_rpc(&self.name),
        }
    }

    /// DefiLlama chain slug used in coin keys (`ethereum:0x...`).
    pub fn llama_slug(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn ethereum() -> Self {
        Chain {
            name: "ethereum".into(),
            chain_id: Some(1),
            rpc_url: Some("https://eth.llamarpc.com".into()),
        }
    }

    pub fn polygon() -> Self {
        Chain {
            name: "polygon".into(),
            chain_id: Some(137),
            rpc_url: Some("https://polygon-rpc.com".into()),
        }
    }

    pub fn custom(name: impl Into<String>, chain_id: u64, rpc_url: impl Into<String>) -> Self {
        Chain {
            name: name.into(),
            chain_id: Some(chain_id),
            rpc_url: Some(rpc_url.into()),
        }
    }

    fn known(name: &str) -> Option<Chain> {
        match name.to_lowercase().as_str() {
            "ethereum" => Some(Self::ethereum()),
            "polygon" => Some(Self::polygon()),
            _ => None,
        }
    }

    fn known_rpc(name: &str) -> Option<&'static str> {
        match name.to_lowercase().as_str() {
            "ethereum" => Some("https://eth.llamarpc.com"),
            "polygon" => Some("https://polygon-rpc.com"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
