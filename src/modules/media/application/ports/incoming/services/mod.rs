mod delete_media_service;
mod delete_product_media_service;
mod get_thumbnail_service;
mod list_media_service;
mod replace_media_service;
mod set_thumbnail_service;
pub(crate) mod storage_ops;
mod upload_media_service;

pub use delete_media_service::DeleteMediaService;
pub use delete_product_media_service::DeleteProductMediaService;
pub use get_thumbnail_service::GetThumbnailService;
pub use list_media_service::ListMediaService;
pub use replace_media_service::ReplaceMediaService;
pub use set_thumbnail_service::SetThumbnailService;
pub use upload_media_service::UploadMediaService;
