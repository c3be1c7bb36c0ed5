//! flux-cf-deployer binary entry point.
//!
//! Serves the deploy controller against the in-memory sandbox platform and
//! Flux directory, seeded from configuration.

use std::sync::Arc;

use flux_cf_deployer::{
    adapters::{
        auth::StaticTokenValidator,
        cloudfoundry::{InMemoryPlatform, InMemoryPlatformConnector},
        flux::{InMemoryFluxClient, InMemoryFluxDirectory},
        http::{app_router, cors_layer, AuthState, CloudFoundryHandlers},
        session_store::InMemorySessionStore,
    },
    application::handlers::cloudfoundry::{
        ProcessLoginHandler, ShowAppLogHandler, ShowDeployablesHandler, ShowProfileHandler,
        TriggerDeploymentHandler,
    },
    config::{AppConfig, LogFormat, ServerConfig, ValidationError},
    domain::foundation::UserId,
};
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    config.validate()?;
    tracing::info!(
        environment = ?config.server.environment,
        cloudfoundry_url = %config.cloudfoundry.url,
        max_sessions = config.sessions.max_sessions,
        "Configuration loaded"
    );

    let validator = StaticTokenValidator::from_config(&config.auth)?;
    if validator.token_count() == 0 {
        tracing::warn!("No bearer tokens configured; every deploy controller request will be rejected");
    }

    let platform = seed_platform(&config).await?;
    let flux = seed_flux(&config).await?;
    let store = Arc::new(InMemorySessionStore::with_capacity_limit(config.sessions.max_sessions));
    let connector = Arc::new(InMemoryPlatformConnector::new(platform));

    let handlers = CloudFoundryHandlers::new(
        Arc::new(ShowDeployablesHandler::new(store.clone(), flux.clone())),
        Arc::new(TriggerDeploymentHandler::new(store.clone(), flux.clone())),
        Arc::new(ShowProfileHandler::new(store.clone(), flux.clone())),
        Arc::new(ProcessLoginHandler::new(
            connector,
            config.cloudfoundry.url.clone(),
            store.clone(),
            flux.clone(),
        )),
        Arc::new(ShowAppLogHandler::new(store, flux)),
    );
    let auth: AuthState = Arc::new(validator);

    let app = app_router(handlers, auth)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "flux-cf-deployer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.clone().into());

    match server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn seed_platform(config: &AppConfig) -> Result<Arc<InMemoryPlatform>, ValidationError> {
    let sandbox = &config.sandbox;
    let platform = Arc::new(InMemoryPlatform::new().with_app_domain(sandbox.app_domain.clone()));

    let accounts = sandbox.account_pairs()?;
    for (login, password) in &accounts {
        platform.add_account(login.clone(), password.clone()).await;
    }
    let spaces = sandbox.spaces_list()?;
    for space in &spaces {
        platform.add_space(space.clone()).await;
    }

    tracing::info!(accounts = accounts.len(), spaces = spaces.len(), "Sandbox platform seeded");
    Ok(platform)
}

/// Every configured identity is signed in to Flux with the sandbox
/// projects; its bearer token doubles as the Flux access token.
async fn seed_flux(config: &AppConfig) -> Result<Arc<InMemoryFluxDirectory>, ValidationError> {
    let directory = Arc::new(InMemoryFluxDirectory::new());
    let projects = config.sandbox.projects_list();

    let identities = config.auth.token_pairs()?;
    for (token, user_id) in &identities {
        let id = UserId::new(user_id.as_str()).map_err(|_| ValidationError::InvalidAuthToken)?;
        let client = InMemoryFluxClient::new(config.sandbox.flux_host.clone(), user_id.clone(), token.clone())
            .with_projects(projects.iter().cloned());
        directory.sign_in(id, Arc::new(client)).await;
    }

    tracing::info!(
        identities = identities.len(),
        projects = projects.len(),
        "Sandbox Flux directory seeded"
    );
    Ok(directory)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
