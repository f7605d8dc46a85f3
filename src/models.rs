use serde::{Deserialize, Serialize};

/// A single static file in the listing response
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FileEntryResponse {
    /// Variable (data product) the file belongs to, e.g. "CHL"
    pub variable: String,
    /// Path of the file, including the static root prefix
    pub filepath: String,
}
