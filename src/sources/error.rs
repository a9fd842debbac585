use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the headless CMS.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("CMS is not configured: {0} is missing")]
    NotConfigured(&'static str),

    /// The refresh-token exchange was rejected. Nothing is cached.
    #[error("failed to get CMS access token: {status}")]
    RemoteAuth { status: StatusCode },

    #[error("CMS request failed: {status}")]
    Status { status: StatusCode },

    #[error("CMS transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CMS response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token lifetime that cannot be turned into an expiry instant.
    #[error("CMS token lifetime {expires_in}s is out of range")]
    InvalidExpiry { expires_in: i64 },
}

impl CmsError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CmsError::NotConfigured(_) => "not_configured",
            CmsError::RemoteAuth { .. } => "auth",
            CmsError::Status { .. } => "status",
            CmsError::Transport(_) => "transport",
            CmsError::Decode(_) | CmsError::InvalidExpiry { .. } => "decode",
        }
    }
}
