use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::cache::token::CachedToken;
use crate::helpers::time::Clock;

/// Single-slot token cache owned by the CMS client.
///
/// The lock is only held for the read or the write itself. Callers that find
/// the slot expired at the same moment will each refresh and the last write
/// wins; the replacement is idempotent so this only costs an extra exchange.
#[derive(Debug, Clone)]
pub struct TokenCache {
    slot: Arc<RwLock<Option<CachedToken>>>,
    clock: Arc<dyn Clock>,
}

impl TokenCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Get token if it exists and is not expired
    pub async fn get(&self) -> Option<CachedToken> {
        let now = self.now();
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_valid_at(now))
            .cloned()
    }

    /// Replace whatever is cached.
    pub async fn set(&self, token: CachedToken) {
        *self.slot.write().await = Some(token);
    }

    /// Current slot content, expired or not.
    pub async fn peek(&self) -> Option<CachedToken> {
        self.slot.read().await.clone()
    }

    pub async fn invalidate(&self) {
        self.slot.write().await.take();
    }
}
