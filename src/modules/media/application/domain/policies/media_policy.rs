use std::time::Duration;

use crate::media::application::domain::entities::FileType;

#[derive(Debug, Clone)]
pub struct MediaPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_types: &'static [(&'static str, FileType)],
    pub storage_timeout: Duration,
    /// Surface an empty product listing as `NotFound` instead of `[]`.
    pub empty_list_is_not_found: bool,
}

impl MediaPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024; // 100MB
    pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_ALLOWED_TYPES: &'static [(&'static str, FileType)] = &[
        ("image/jpeg", FileType::Image),
        ("image/png", FileType::Image),
        ("image/gif", FileType::Image),
        ("video/mp4", FileType::Video),
        ("video/quicktime", FileType::Video),
        ("video/x-msvideo", FileType::Video),
    ];

    /// Env vars: `MEDIA_MAX_FILE_SIZE_BYTES`, `MEDIA_STORAGE_TIMEOUT_SECS`,
    /// `MEDIA_EMPTY_LIST_IS_NOT_FOUND`. Missing, unparsable or zero values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same rules as [`MediaPolicy::from_env`] over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_positive = |key: &str| parse::<u64>(lookup(key)).filter(|v| *v > 0);

        let max_file_size_bytes = parse_positive("MEDIA_MAX_FILE_SIZE_BYTES")
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);
        let timeout_secs = parse_positive("MEDIA_STORAGE_TIMEOUT_SECS")
            .unwrap_or(Self::DEFAULT_STORAGE_TIMEOUT_SECS);
        let empty_list_is_not_found =
            parse(lookup("MEDIA_EMPTY_LIST_IS_NOT_FOUND")).unwrap_or(false);

        Self {
            max_file_size_bytes,
            allowed_types: Self::DEFAULT_ALLOWED_TYPES,
            storage_timeout: Duration::from_secs(timeout_secs),
            empty_list_is_not_found,
        }
    }

    /// Defaults only, no env reads. Handy for tests and custom wiring.
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            allowed_types: Self::DEFAULT_ALLOWED_TYPES,
            storage_timeout: Duration::from_secs(Self::DEFAULT_STORAGE_TIMEOUT_SECS),
            empty_list_is_not_found: false,
        }
    }

    pub fn with_storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = timeout;
        self
    }

    pub fn with_empty_list_is_not_found(mut self, value: bool) -> Self {
        self.empty_list_is_not_found = value;
        self
    }

    /// Maps a declared content type to its file type, ignoring parameters
    /// such as `; charset=...` and letter case.
    pub fn classify(&self, content_type: &str) -> Option<FileType> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        self.allowed_types
            .iter()
            .find(|(mime, _)| *mime == essence)
            .map(|(_, file_type)| *file_type)
    }

    pub fn allowed_mime_types(&self) -> Vec<&'static str> {
        self.allowed_types.iter().map(|(mime, _)| *mime).collect()
    }

    pub fn exceeds_max_size(&self, len: u64) -> bool {
        len > self.max_file_size_bytes
    }
}

impl Default for MediaPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
