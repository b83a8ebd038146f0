use attendance_tracker::{router, AppState, AttendanceView, Config, ScheduleClient, ViewSettings};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let client = ScheduleClient::new(config.schedule_url.clone(), config.schedule_timeout)?;
    let view = AttendanceView::new(ViewSettings::from(&config), config.default_group.clone());
    let state = AppState::new(view, client);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    info!(url = state.client.url(), "loading schedule");
    state.spawn_refresh().await;

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
