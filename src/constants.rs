use alloy::primitives::{address, Address};

#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

env_lazy! {
    pub DEBUG_LOGS: bool = ("DEBUG_LOGS", false);
}

/// ENS name whose balance gets reported.
pub const ACCOUNT_NAME: &str = "vitalik.eth";
/// Short label printed in the output line.
pub const ACCOUNT_LABEL: &str = "vitalik";

pub const DEFAULT_ETH_RPC: &str = "https://ethereum-rpc.publicnode.com";

/// ENS registry, same address on mainnet and the public testnets.
pub const ENS_REGISTRY: Address = address!("0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

pub const ETHER_DECIMALS: u8 = 18;
