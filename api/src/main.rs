use std::net::SocketAddr;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod extract;
mod middleware;
mod rate_limit;
mod routes;
mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Koan Orchestrator",
        version = "1.0.0",
        description = "Maps free-text input to pre-authored contemplative-practice templates, \
                       with a crisis-keyword safety filter and per-client throttling."
    ),
    paths(routes::health::health_check, routes::koan::generate_koan),
    components(schemas(
        routes::health::HealthResponse,
        koan_core::compose::KoanRequest,
        koan_core::compose::KoanResponse,
        koan_core::error::ApiError,
    ))
)]
struct ApiDoc;

fn app(app_state: state::AppState) -> Router {
    let cors_layer = middleware::cors::build_cors_layer();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::health::router())
        .merge(routes::koan::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "koan_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let app = app(state::AppState::new());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Koan Orchestrator listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
