use latency_analytics::config::AppConfig;
use latency_analytics::http::routes::router;
use latency_analytics::telemetry::store::DatasetStore;
use latency_analytics::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store = DatasetStore::builtin();
    tracing::info!(
        regions = ?store.regions(),
        samples = store.sample_count(),
        "telemetry dataset ready"
    );

    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
