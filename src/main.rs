mod model;
mod server;

use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let token_decoder = startup::setup_token_decoder(&config);
    if token_decoder.is_verifying() {
        tracing::info!("Verifying bearer token signatures with HS256");
    }

    let app = router::router()
        .with_state(AppState::new(db, token_decoder))
        .layer(session)
        .layer(startup::setup_cors());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
