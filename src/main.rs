use crud_books::db::PgExecutor;
use crud_books::{AppState, Config, create_router};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging: RUST_LOG ha la precedenza sul filtro di default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crud_books=debug,tower_http=info")),
        )
        .init();

    // Inizializza la configurazione, senza DATABASE_URL valido non si parte
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };
    config.print_info();

    // Il pool viene aperto qui e passato allo stato, niente handle globale
    let executor = match PgExecutor::connect(&config).await {
        Ok(executor) => executor,
        Err(err) => {
            error!("Unable to create connection pool: {}", err);
            process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(Arc::new(executor)));

    let app = create_router(state, Duration::from_secs(config.request_timeout_secs));

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        // senza segnale non c'è modo di fermarsi in modo pulito: si resta in ascolto
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
