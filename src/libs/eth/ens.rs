//! ENS lookups against the mainnet registry.
//!
//! Only forward resolution is supported: name -> registry `resolver(node)`
//! -> resolver `addr(node)`. Wildcard (ENSIP-10) and CCIP-read resolvers
//! are not followed.

use alloy::primitives::{keccak256, Address, B256};
use alloy::providers::Provider;
use anyhow::Result;

use crate::constants::ENS_REGISTRY;
use crate::libs::writing::cc;
use crate::log;

alloy::sol! {
    #[sol(rpc)]
    interface IEnsRegistry {
        function resolver(bytes32 node) view returns (address);
    }

    #[sol(rpc)]
    interface IAddrResolver {
        function addr(bytes32 node) view returns (address);
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnsError {
    #[error("empty ENS name")]
    EmptyName,
    #[error("ENS name `{0}` has an empty label")]
    EmptyLabel(String),
    #[error("no resolver set for `{0}`")]
    NoResolver(String),
    #[error("`{0}` does not resolve to an address")]
    Unresolved(String),
}

/// ASCII-only normalisation: trim and lowercase, labels must be non-empty.
/// Not full ENSIP-15: non-ASCII characters are left as they are.
pub fn normalize(name: &str) -> Result<String, EnsError> {
    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err(EnsError::EmptyName);
    }
    if name.split('.').any(str::is_empty) {
        return Err(EnsError::EmptyLabel(name));
    }
    Ok(name)
}

/// EIP-137 namehash. The empty name hashes to the zero node.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        node = keccak256([node.as_slice(), label_hash.as_slice()].concat());
    }
    node
}

/// Resolve an ENS name (or pass through a hex address) to an [`Address`].
pub async fn resolve_name<P: Provider + Clone>(provider: P, name: &str) -> Result<Address> {
    if let Ok(addr) = name.trim().parse::<Address>() {
        return Ok(addr);
    }

    let name = normalize(name)?;
    let node = namehash(&name);

    let registry = IEnsRegistry::new(ENS_REGISTRY, provider.clone());
    let resolver = registry.resolver(node).call().await?;
    if resolver == Address::ZERO {
        return Err(EnsError::NoResolver(name).into());
    }
    log!("ens: {} uses resolver {}", name, resolver);

    let addr = IAddrResolver::new(resolver, provider).addr(node).call().await?;
    if addr == Address::ZERO {
        return Err(EnsError::Unresolved(name).into());
    }
    log!(cc::GREEN, "ens: {} -> {}", name, addr);
    Ok(addr)
}
