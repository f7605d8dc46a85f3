mod api_doc;
mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use catalog::Catalog;
use config::Config;
use state::AppState;

fn app(state: AppState) -> Router {
    let static_root = state.config.static_root.clone();

    Router::new()
        .route(routes::FILES_LIST, get(handlers::list_handler))
        .route(routes::FILES_IMAGE, get(handlers::image_handler))
        .route(routes::FILES_BINARY, get(handlers::binary_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI)
                .url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        )
        // Direct, unmediated access to the whole tree
        .nest_service(routes::STATIC_MOUNT, ServeDir::new(static_root))
        // The original service allowed any origin, method, and header with
        // credentials; very_permissive reproduces that boundary
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("oceansat-files starting");

    let config = Config::from_env()?;
    config.log_startup();

    let catalog = Catalog::new(&config.static_root);
    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        catalog,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
