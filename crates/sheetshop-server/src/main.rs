mod api;
mod cache;
mod middleware;
mod scheduler;

use sheetshop_sheets::SheetClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, build_cors, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sheetshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting sheetshop-server");

    let sheets = SheetClient::new(config.sheet_request_timeout_secs, &config.sheet_user_agent)?;
    let state = AppState::new(sheets, config.customers_sheet_url.as_str());

    if config.refresh_on_startup {
        scheduler::run_refresh(&state).await;
    }

    let _scheduler = match config.refresh_cron.as_deref() {
        Some(cron) => Some(scheduler::build_scheduler(state.clone(), cron).await?),
        None => None,
    };

    let app = build_app(state, build_cors(&config.cors_origin)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
