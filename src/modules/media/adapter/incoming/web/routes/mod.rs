pub mod dto;
mod media_error;
pub mod multipart_form;

pub mod delete_media;
pub mod delete_product_media;
pub mod get_thumbnail;
pub mod list_media;
pub mod replace_media;
pub mod serve_file;
pub mod set_thumbnail;
pub mod upload_media;

pub use delete_media::delete_media_handler;
pub use delete_product_media::delete_product_media_handler;
pub use get_thumbnail::get_thumbnail_handler;
pub use list_media::list_media_handler;
pub use media_error::map_media_error;
pub use replace_media::replace_media_handler;
pub use serve_file::serve_file_handler;
pub use set_thumbnail::set_thumbnail_handler;
pub use upload_media::upload_media_handler;
