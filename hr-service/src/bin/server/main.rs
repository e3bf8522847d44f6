use std::sync::Arc;

use hr_service::config::Config;
use hr_service::domain::job::service::JobService;
use hr_service::domain::user::service::SessionService;
use hr_service::inbound::http::router::create_router;
use hr_service::outbound::stores::FixtureCredentialStore;
use hr_service::outbound::stores::FixtureJobBoard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "hr-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let credential_store = Arc::new(FixtureCredentialStore::seeded());
    let job_board = Arc::new(FixtureJobBoard::seeded());

    let session_service = Arc::new(SessionService::new(credential_store));
    let job_service = Arc::new(JobService::new(job_board));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(session_service, job_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
