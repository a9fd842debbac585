//! Shared constants and invariants

pub const DEFAULT_SAFETY_MARGIN_SECS: u64 = 60;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// CMS
pub const DEFAULT_CMS_BASE_URL: &str = "https://services.leadconnectorhq.com";
pub const DEFAULT_CMS_API_VERSION: &str = "2021-07-28";
pub const CMS_API_VERSION_HEADER: &str = "Version";

// Site copy
pub const BRAND_NAME: &str = "KontentFire";
pub const DEFAULT_RELATED_LIMIT: usize = 6;
