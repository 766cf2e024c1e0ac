use pagelift::{app_state::AppState, config, routes, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = config::Config::from_env()?;
    let state = AppState::from_config(&config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        "Serving legacy pages from {} on {}",
        config.legacy_pages_dir().display(),
        config.bind_addr()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
