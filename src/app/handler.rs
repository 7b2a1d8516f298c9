use {
    crate::app::reporter::{report, Account},
    crate::libs::config::{load_env, Config},
    crate::libs::eth::client::EthClient,
    crate::libs::writing::cc,
    crate::{log, warn},
    anyhow::Result,
};

/// Load config, connect, print the balance line on stdout.
pub async fn init() -> Result<()> {
    load_env();
    let cfg = Config::new();
    log!(cc::CYAN, "config: {}", serde_json::to_string(&cfg)?);

    let url = cfg.rpc_url()?;
    if url.scheme() != "https" {
        warn!("ETH_RPC is not https: {}", url);
    }

    let client = EthClient::connect(url);
    if crate::libs::writing::enabled() {
        match client.chain_id().await {
            Ok(id) => log!(cc::LIGHT_GREEN, "chain id {}", id),
            Err(e) => log!(cc::YELLOW, "chain id unavailable: {}", e),
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(&client, Account::default(), &mut out).await
}
