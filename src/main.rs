use anyhow::Result;
use ethbal::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
