use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::FileEntryResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "oceansat-files API",
        version = "1.0.0",
        description = "Lists and serves ocean satellite data products (PNG images and binary .dat files) from a static directory tree"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::image::image_handler,
        handlers::binary::binary_handler
    ),
    components(
        schemas(
            FileEntryResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "files", description = "Static file listing and retrieval")
    )
)]
pub struct ApiDoc;
