mod delete_media;
mod delete_product_media;
mod errors;
mod get_thumbnail;
mod list_media;
mod replace_media;
mod set_thumbnail;
mod upload_media;

pub use errors::MediaError;

pub use upload_media::{UploadMediaCommand, UploadMediaUseCase};

pub use replace_media::{ReplaceMediaCommand, ReplaceMediaUseCase, ReplaceOutcome};

pub use set_thumbnail::SetThumbnailUseCase;

pub use get_thumbnail::GetThumbnailUseCase;

pub use delete_media::{DeleteMediaUseCase, DeleteOutcome};

pub use delete_product_media::{BulkDeleteOutcome, DeleteProductMediaUseCase, FailedFile};

pub use list_media::ListMediaUseCase;
