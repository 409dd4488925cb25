use anyhow::Result;
use axum::http::HeaderName;
use profile_api::application::{
    ports::{identity::IdentityProvider, time::Clock},
    services::ApplicationServices,
};
use profile_api::config::AppConfig;
use profile_api::domain::profile::ProfileRepository;
use profile_api::infrastructure::{
    database, identity::CognitoIdentityProvider, repositories::MySqlProfileRepository,
    time::SystemClock,
};
use profile_api::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let db = config.database();
    let pool = database::init_pool(db.connect_options(), db.max_connections).await?;
    if db.run_migrations {
        database::run_migrations(&pool).await?;
    }

    let cognito = config.cognito();
    tracing::info!(
        region = %cognito.region,
        user_pool_id = %cognito.user_pool_id,
        app_client_id = %cognito.app_client_id,
        "identity provider configured"
    );

    let profile_repo: Arc<dyn ProfileRepository> = Arc::new(MySqlProfileRepository::new(pool));
    let identity_provider: Arc<dyn IdentityProvider> =
        Arc::new(CognitoIdentityProvider::new(cognito.endpoint.clone())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&profile_repo),
        Arc::clone(&identity_provider),
        Arc::clone(&clock),
    ));

    let claims_header = HeaderName::from_bytes(config.authorizer_claims_header().as_bytes())?;
    let state = HttpState::new(Arc::clone(&services), claims_header);

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
