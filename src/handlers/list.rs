use crate::error::{ApiError, ErrorResponse};
use crate::models::FileEntryResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /files/ handler - List all static files
///
/// Walks the static root and returns one entry per file found, tagged with
/// the variable (first-level subdirectory) it belongs to. The tree is
/// re-read on every call, so out-of-band changes show up immediately.
/// No ordering is guaranteed.
#[utoipa::path(
    get,
    path = routes::FILES_LIST,
    responses(
        (status = 200, description = "All files under the static root", body = Vec<FileEntryResponse>),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<FileEntryResponse>>), ApiError> {
    let entries = state.catalog.list_all().await?;

    let data: Vec<FileEntryResponse> = entries
        .into_iter()
        .map(|entry| FileEntryResponse {
            variable: entry.variable,
            filepath: entry.filepath,
        })
        .collect();

    tracing::info!("Listed {} static files", data.len());
    Ok((StatusCode::OK, Json(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::{body::Body, http::Request, routing::get, Router};
    use std::collections::HashSet;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, TempDir) {
        let dir = TempDir::new().unwrap();

        let config = Config {
            static_root: dir.path().to_path_buf(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState {
            catalog: Catalog::new(dir.path()),
            config: Arc::new(config),
        };

        let app = Router::new()
            .route(routes::FILES_LIST, get(list_handler))
            .with_state(state);

        (app, dir)
    }

    fn write_file(dir: &TempDir, relative: &str, contents: &[u8]) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_list_endpoint_empty_root() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/files/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_endpoint_with_files() {
        let (app, dir) = setup_test_app();
        write_file(&dir, "CHL/chlorophyll.png", b"png");
        write_file(&dir, "CHL/chlorophyll.dat", b"dat");
        write_file(&dir, "AOD/aod.png", b"png");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/files/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let entries: Vec<FileEntryResponse> = serde_json::from_slice(&body).unwrap();

        assert_eq!(entries.len(), 3);

        let variables: HashSet<&str> =
            entries.iter().map(|e| e.variable.as_str()).collect();
        assert_eq!(variables, HashSet::from(["CHL", "AOD"]));

        for entry in &entries {
            assert!(entry.filepath.starts_with(&*dir.path().to_string_lossy()));
        }
    }

    #[tokio::test]
    async fn test_list_endpoint_idempotent() {
        let (app, dir) = setup_test_app();
        write_file(&dir, "CHL/a.png", b"a");
        write_file(&dir, "SSC/b.dat", b"b");

        let mut snapshots = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/files/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let entries: Vec<FileEntryResponse> = serde_json::from_slice(&body).unwrap();
            let set: HashSet<(String, String)> = entries
                .into_iter()
                .map(|e| (e.variable, e.filepath))
                .collect();
            snapshots.push(set);
        }

        assert_eq!(snapshots[0], snapshots[1]);
    }
}
