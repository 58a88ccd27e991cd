use env_logger::Env;
use log::{error, info};
use meridian_runner::{TradingSession, build_exchange, load_config, load_default_config};

#[tokio::main]
async fn main() -> meridian_runner::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Optional config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            load_config(path)?
        }
        None => {
            info!("No config path given, using embedded testnet config");
            load_default_config()?
        }
    }
    .with_env_overrides();

    let exchange = build_exchange(&config)?;
    if !exchange.client().has_credentials() {
        info!("No API key configured; signed requests will fail");
    }

    let session = TradingSession::new(exchange);
    session
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C: {}", e);
            }
        })
        .await;

    Ok(())
}
