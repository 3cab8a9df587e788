use anyhow::Context;
use clap::Parser;
use log::info;
use patient_api_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let store = config
        .open_store()
        .with_context(|| format!("opening store at {}", config.data_file.display()))?;
    let app = router(AppState::from_boxed(store));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!("Patient API running on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
