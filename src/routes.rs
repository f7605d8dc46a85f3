// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const FILES_LIST: &str = "/files/";
pub const FILES_IMAGE: &str = "/files/image/{variable}";
pub const FILES_BINARY: &str = "/files/binary/{variable}";

pub const STATIC_MOUNT: &str = "/static";
pub const SWAGGER_UI: &str = "/api/docs";
pub const OPENAPI_JSON: &str = "/api/openapi.json";
