use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed set of media kinds. Derived from the declared content type at
/// creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
        }
    }

    pub fn can_be_thumbnail(&self) -> bool {
        matches!(self, FileType::Image)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown file type: {0}")]
pub struct UnknownFileType(pub String);

impl FromStr for FileType {
    type Err = UnknownFileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(FileType::Image),
            "video" => Ok(FileType::Video),
            other => Err(UnknownFileType(other.to_string())),
        }
    }
}

/// The persisted metadata of one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MediaRecord {
    pub id: Uuid,
    pub product_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: FileType,
    pub is_thumbnail: bool,
    pub created_at: DateTime<Utc>,
}

/// A record about to be inserted. `is_thumbnail` is already normalised
/// (never true for videos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMediaRecord {
    pub id: Uuid,
    pub product_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: FileType,
    pub is_thumbnail: bool,
}

impl NewMediaRecord {
    pub fn new(
        product_id: String,
        file_name: String,
        file_url: String,
        file_type: FileType,
        requested_thumbnail: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            file_name,
            file_url,
            file_type,
            is_thumbnail: requested_thumbnail && file_type.can_be_thumbnail(),
        }
    }
}

/// A best-effort storage cleanup that did not succeed. Returned next to a
/// successful result so callers can see the possibly orphaned object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleanupWarning {
    pub file_url: String,
    pub reason: String,
}

/// Storage file name for a fresh upload: `<uuid-simple><.ext>`, where the
/// extension comes from the client supplied name.
pub fn make_storage_file_name(original_name: Option<&str>) -> String {
    let id = Uuid::new_v4().simple().to_string();

    match original_name.and_then(safe_extension) {
        Some(ext) => format!("{id}.{ext}"),
        None => id,
    }
}

fn safe_extension(name: &str) -> Option<String> {
    let ext = std::path::Path::new(name.trim())
        .extension()
        .and_then(|s| s.to_str())?
        .trim()
        .to_ascii_lowercase();

    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(ext)
}
