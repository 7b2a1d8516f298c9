use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use url::Url;

use crate::libs::eth::ens::resolve_name;
use crate::log;

/// Anything that can turn an account name into a wei balance.
///
/// The reporter only ever talks to this, so tests can hand it a fake
/// instead of a live node.
#[allow(async_fn_in_trait)]
pub trait BalanceSource {
    async fn balance_of_name(&self, name: &str) -> Result<U256>;
}

/// Read-only handle to an Ethereum JSON-RPC endpoint.
#[derive(Clone, Debug)]
pub struct EthClient<P> {
    provider: P,
}

impl EthClient<()> {
    /// HTTP provider for `rpc_url`. No request is made until the first call.
    pub fn connect(rpc_url: Url) -> EthClient<impl Provider + Clone> {
        log!("connecting to {}", rpc_url);
        EthClient {
            provider: ProviderBuilder::new().connect_http(rpc_url),
        }
    }
}

impl<P: Provider + Clone> EthClient<P> {
    pub fn from_provider(provider: P) -> Self {
        Self { provider }
    }

    pub async fn chain_id(&self) -> Result<u64> {
        let id = self.provider.get_chain_id().await?;
        Ok(id)
    }

    pub async fn resolve(&self, name: &str) -> Result<Address> {
        resolve_name(self.provider.clone(), name)
            .await
            .with_context(|| format!("failed to resolve {name}"))
    }

    /// Balance in wei at the latest block.
    pub async fn balance_at(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .with_context(|| format!("eth_getBalance failed for {address}"))
    }
}

impl<P: Provider + Clone> BalanceSource for EthClient<P> {
    async fn balance_of_name(&self, name: &str) -> Result<U256> {
        let address = self.resolve(name).await?;
        let wei = self.balance_at(address).await?;
        log!("balance of {} ({}) = {} wei", name, address, wei);
        Ok(wei)
    }
}
