use axum::{Router, routing::get};
use fc_api::{config::ApiConfig, state::ApiState};
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    fc_api::tracing::init_tracing(&config);

    let metrics_handle = fc_api::metrics::init_metrics()?;

    let state = ApiState::new();

    // Kept outside the API middleware stack, it only needs the exporter handle
    let metrics_app = Router::new()
        .route("/metrics", get(fc_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = fc_api::router::app(&config, state).merge(metrics_app);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        env = ?config.env,
        origins = ?config.parsed_allowed_origins(),
        "Card service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Card service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
