use gudang_core::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let (_state, router) = gudang_api::setup::initialize_app(config.clone()).await?;
    gudang_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
