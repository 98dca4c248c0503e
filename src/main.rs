use pallet_counter::{router, AppState, Config, CountStore};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let store = CountStore::open(&config.database_path).await?;
    let state = AppState::new(store, config.timezone);

    let today = state.today();
    match state.store.ensure_row(&today).await {
        Ok(()) => info!(date = %today, "database initialized"),
        Err(err) => error!("error initializing database: {err}"),
    }

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(
        database = %config.database_path.display(),
        timezone = %config.timezone,
        "listening on http://{addr}"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
