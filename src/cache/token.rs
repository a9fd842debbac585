use chrono::{DateTime, TimeDelta, Utc};

/// Bearer token issued by the CMS together with the instant it stops being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// Expiry is pulled in by `safety_margin_seconds` so a token is never
    /// handed out right before the server drops it.
    ///
    /// `None` when the lifetime does not fit a representable instant.
    pub fn from_lifetime(
        value: String,
        issued_at: DateTime<Utc>,
        expires_in_seconds: i64,
        safety_margin_seconds: u64,
    ) -> Option<Self> {
        let margin = i64::try_from(safety_margin_seconds).ok()?;
        let lifetime = TimeDelta::try_seconds(expires_in_seconds.checked_sub(margin)?)?;
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        Some(Self { value, expires_at })
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
