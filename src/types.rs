/// One retrievable rendition of the requested media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub url: String,
    pub quality: String,
    pub format: String,
    /// Human-readable size label, when the service reports one.
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadResult {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub links: Vec<MediaLink>,
}

/// Lifecycle of the one outbound request. Success carries the normalized
/// payload and Error the user-facing message, so neither can exist in any
/// other phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Success(DownloadResult),
    Error(String),
}

impl RequestPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }
}
