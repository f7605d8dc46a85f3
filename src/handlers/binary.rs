use crate::catalog::FileKind;
use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    http::HeaderName,
};

/// GET /files/binary/:variable handler - Serve the variable's binary data file
///
/// Returns the first `.dat` file (lexicographically) under the variable's
/// subdirectory as an opaque octet stream.
#[utoipa::path(
    get,
    path = routes::FILES_BINARY,
    params(
        ("variable" = String, Path, description = "The name of variable to get")
    ),
    responses(
        (status = 200, description = "Binary data file for the variable", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "No .dat file for this variable", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn binary_handler(
    State(state): State<AppState>,
    Path(variable): Path<String>,
) -> Result<([(HeaderName, &'static str); 1], Vec<u8>), ApiError> {
    match state.catalog.resolve(&variable, FileKind::Binary).await? {
        Some(data) => {
            tracing::info!("Serving binary file for variable: {}", variable);
            Ok((
                [(header::CONTENT_TYPE, FileKind::Binary.media_type())],
                data,
            ))
        }
        None => {
            tracing::info!("No binary file found for variable: {}", variable);
            Err(ApiError::VariableNotFound {
                variable,
                kind: FileKind::Binary,
            })
        }
    }
}
