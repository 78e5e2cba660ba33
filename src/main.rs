mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method,
};
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    scheduler::schedule_expiry,
    service::{admin::code::AdminCodeService, photo::storage::StorageClient},
    startup,
    state::AppState,
};

/// Sustained requests per second allowed per client IP.
const RATE_LIMIT_PER_SECOND: u64 = 5;
/// Requests a client IP may burst above the sustained rate.
const RATE_LIMIT_BURST: u32 = 50;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let storage = StorageClient::new(http_client.clone(), config.storage.clone());

    let admin_code_service = AdminCodeService::new();

    tracing::info!("Starting server");

    // Check for admin users and generate login link if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    schedule_expiry::start_scheduler(db.clone()).await?;

    let governor_config = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let app_origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;
    let cors = CorsLayer::new()
        .allow_origin(app_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.oauth_userinfo_url.clone(),
            admin_code_service,
            storage,
            config.app_url.clone(),
        ))
        .layer(session)
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
