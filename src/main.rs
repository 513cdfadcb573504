use sber_payments::{config::Config, logging::init_tracing, GatewayClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    tracing::info!("Starting sber-payments v{}", env!("CARGO_PKG_VERSION"));

    let order_ids: Vec<String> = std::env::args().skip(1).collect();
    if order_ids.is_empty() {
        anyhow::bail!("usage: sber-payments <order-id>...");
    }

    // Load configuration
    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    tracing::info!(base_url = %config.gateway.base_url, "Configuration loaded successfully");

    let client = GatewayClient::from_config(&config)?;

    tracing::info!(
        credential = client.credential().kind(),
        "Gateway client initialized"
    );

    for order_id in &order_ids {
        let status = client.get_order_status(order_id).await?;
        println!("{}", serde_json::to_string_pretty(&status)?);
    }

    Ok(())
}
