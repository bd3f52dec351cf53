use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planetary_mechanics::{PositionService, PrecisionEphemeris};
use vsop87_ephemeris::Vsop87Ephemeris;

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PositionService>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "solar_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve the precision ephemeris once; requests never re-probe.
    let provider = resolve_ephemeris();
    let ephemeris_label = provider
        .as_ref()
        .map_or("approximate (fallback only)", |p| p.library());

    let state = AppState {
        service: Arc::new(PositionService::new(provider)),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/positions", get(routes::get_positions))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let port = std::env::var("SOLAR_GATEWAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "21700".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("🪐 Solar Gateway starting on {}", addr);
    tracing::info!("   Ephemeris: {}", ephemeris_label);
    tracing::info!("   Planets: 8 (Mercury through Neptune)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Startup resolution of the precision capability: honor the
/// SOLAR_EPHEMERIS override, then probe vsop87.
fn resolve_ephemeris() -> Option<Arc<dyn PrecisionEphemeris>> {
    match std::env::var("SOLAR_EPHEMERIS").as_deref() {
        Ok("approximate") => {
            tracing::warn!("SOLAR_EPHEMERIS=approximate set - precision ephemeris disabled");
            return None;
        }
        Ok("vsop87") | Err(_) => {}
        Ok(other) => {
            tracing::warn!("unknown SOLAR_EPHEMERIS value {:?}, defaulting to vsop87", other);
        }
    }

    match Vsop87Ephemeris::probe() {
        Ok(provider) => {
            tracing::info!("   vsop87 ephemeris initialized");
            Some(Arc::new(provider))
        }
        Err(err) => {
            tracing::warn!("   vsop87 unavailable ({}), serving approximate positions only", err);
            None
        }
    }
}

/// Service health plus which ephemeris path is live.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "solar-gateway",
        "ephemeris": state.service.precision_library().unwrap_or("approximate"),
        "precisionAvailable": state.service.precision_library().is_some(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
