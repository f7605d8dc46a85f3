pub mod health;
pub mod list;
pub mod image;
pub mod binary;

pub use health::health_handler;
pub use list::list_handler;
pub use image::image_handler;
pub use binary::binary_handler;
