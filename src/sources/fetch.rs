/// Result of a degrade-gracefully CMS read.
///
/// Callers that only need content use [`FetchOutcome::into_inner_or_default`];
/// the variant tells why a result came back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Fetched(T),
    /// Credentials or ids are missing, no request was made.
    NotConfigured,
    /// The request was made and failed for the given reason.
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    pub fn reason(&self) -> &'static str {
        match self {
            FetchOutcome::Fetched(_) => "fetched",
            FetchOutcome::NotConfigured => "not_configured",
            FetchOutcome::Failed(_) => "failed",
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Fetched(value) => FetchOutcome::Fetched(f(value)),
            FetchOutcome::NotConfigured => FetchOutcome::NotConfigured,
            FetchOutcome::Failed(reason) => FetchOutcome::Failed(reason),
        }
    }

    pub fn fetched(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Default> FetchOutcome<T> {
    pub fn into_inner_or_default(self) -> T {
        self.fetched().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_keep_their_reason() {
        let failed: FetchOutcome<Vec<u8>> = FetchOutcome::Failed("503".into());
        assert_eq!(failed.reason(), "failed");
        assert!(failed.clone().into_inner_or_default().is_empty());

        let unset: FetchOutcome<Vec<u8>> = FetchOutcome::NotConfigured;
        assert_eq!(unset.reason(), "not_configured");
        assert!(!unset.is_fetched());
    }

    #[test]
    fn map_keeps_variant() {
        let fetched = FetchOutcome::Fetched(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(fetched, FetchOutcome::Fetched(3));

        let failed: FetchOutcome<usize> = FetchOutcome::<Vec<u8>>::Failed("x".into()).map(|v| v.len());
        assert_eq!(failed, FetchOutcome::Failed("x".into()));
    }
}
