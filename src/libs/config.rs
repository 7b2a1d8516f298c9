use {
    crate::constants::DEFAULT_ETH_RPC,
    anyhow::{Context, Result},
    dotenv::dotenv,
    serde::Serialize,
    std::{fmt::Debug, str::FromStr},
    url::Url,
};

pub fn load_env() {
    dotenv().ok();
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub eth_rpc: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_rpc(DEFAULT_ETH_RPC)
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            eth_rpc: std::env::var("ETH_RPC").unwrap_or_else(|_| DEFAULT_ETH_RPC.to_string()),
        }
    }

    pub fn from_rpc<S: Into<String>>(rpc: S) -> Self {
        Self {
            eth_rpc: rpc.into(),
        }
    }

    /// Endpoint as a parsed URL; a bad `ETH_RPC` surfaces here.
    pub fn rpc_url(&self) -> Result<Url> {
        Url::parse(&self.eth_rpc).with_context(|| format!("Failed to parse ETH_RPC: {}", self.eth_rpc))
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}
