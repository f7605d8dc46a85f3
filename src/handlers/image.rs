use crate::catalog::FileKind;
use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    http::HeaderName,
};

/// GET /files/image/:variable handler - Serve the variable's PNG image
///
/// Returns the first `.png` file (lexicographically) under the variable's
/// subdirectory. The variable name is taken from the path as-is; a name that
/// matches no directory simply resolves to 404.
#[utoipa::path(
    get,
    path = routes::FILES_IMAGE,
    params(
        ("variable" = String, Path, description = "The name of variable to get")
    ),
    responses(
        (status = 200, description = "PNG image for the variable", body = Vec<u8>, content_type = "image/png"),
        (status = 404, description = "No PNG file for this variable", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn image_handler(
    State(state): State<AppState>,
    Path(variable): Path<String>,
) -> Result<([(HeaderName, &'static str); 1], Vec<u8>), ApiError> {
    match state.catalog.resolve(&variable, FileKind::Image).await? {
        Some(data) => {
            tracing::info!("Serving image for variable: {}", variable);
            Ok((
                [(header::CONTENT_TYPE, FileKind::Image.media_type())],
                data,
            ))
        }
        None => {
            tracing::info!("No image found for variable: {}", variable);
            Err(ApiError::VariableNotFound {
                variable,
                kind: FileKind::Image,
            })
        }
    }
}
