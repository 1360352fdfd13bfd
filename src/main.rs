//! CareFit API server.
//!
//! Loads configuration, wires adapters into the router and serves until
//! Ctrl-C.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carefit::adapters::http::{api_router, ApiServices};
use carefit::adapters::{
    ImmediateGenerationDelay, InMemoryPatientRepository, InMemorySessionStore,
    MockIdentityProvider, PulldownExportService, TokioGenerationDelay,
};
use carefit::config::AppConfig;
use carefit::domain::patient::seed_patients;
use carefit::ports::GenerationDelay;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return (!config.is_production()).then(CorsLayer::permissive);
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let patients = if config.features.seed_fixtures {
        let seeded = seed_patients()?;
        tracing::info!(count = seeded.len(), "seeded demo patients");
        InMemoryPatientRepository::with_patients(seeded)
    } else {
        InMemoryPatientRepository::new()
    };

    let delay: Arc<dyn GenerationDelay> = if config.care_plan.delay_enabled() {
        Arc::new(TokioGenerationDelay::new(config.care_plan.generation_delay()))
    } else {
        Arc::new(ImmediateGenerationDelay)
    };

    let sessions = Arc::new(InMemorySessionStore::new());
    let services = ApiServices {
        patients: Arc::new(patients),
        identity: Arc::new(MockIdentityProvider::new()?),
        sessions: sessions.clone(),
        validator: sessions,
        delay,
        exporter: Arc::new(PulldownExportService::new()),
    };

    let mut app = api_router(services).layer(TimeoutLayer::new(config.server.request_timeout()));
    if let Some(cors) = cors_layer(&config) {
        app = app.layer(cors);
    }
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "CareFit API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for shutdown signal: {e}");
            }
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
