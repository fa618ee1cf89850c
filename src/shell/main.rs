use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt};

use hotel_reservations::modules::hotel::adapters::outbound::sqlite::SqliteHotelRepository;
use hotel_reservations::shell::config::Config;
use hotel_reservations::shell::graphql::build_schema;
use hotel_reservations::shell::http;
use hotel_reservations::shell::seed::seed_demo_data;
use hotel_reservations::shell::state::AppState;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();

    let repository = SqliteHotelRepository::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open {}", config.database_url))?;
    repository
        .run_migrations()
        .await
        .context("failed to run migrations")?;

    if config.seed_demo_data {
        seed_demo_data(&repository)
            .await
            .context("failed to seed demo data")?;
    }

    let state = AppState::new(repository);
    let schema = build_schema(state.clone());
    let app = http::router(state, schema);

    let addr = config.addr();
    tracing::info!(%addr, "REST on /guests /rooms /reservations, GraphQL on /graphql");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}
