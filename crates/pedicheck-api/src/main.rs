use tracing_subscriber::EnvFilter;

use pedicheck_api::config;
use pedicheck_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var_os("PEDICHECK_LOG_JSON").is_some() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = config::load_config()?;
    let state = AppState::from_config(&config)?;

    if let Some(path) = &config.dataset_path {
        // The service still answers with safety rules when this fails.
        if let Err(e) = state.train_from_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "startup training failed");
        }
    } else {
        tracing::info!("no dataset configured, starting without a condition model");
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "pedicheck listening");
    axum::serve(listener, pedicheck_api::app(state)).await?;
    Ok(())
}
