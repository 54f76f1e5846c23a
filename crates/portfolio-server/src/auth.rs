//! The persisted authoring flag.
//!
//! An external login flow stores `"true"` under [`FLAG_KEY`]; anything else,
//! a missing key, or an unreachable Redis reads as not logged in.

use portfolio_common::redis::RedisCache;
use portfolio_core::SessionContext;
use tracing::info;

pub const FLAG_KEY: &str = "portfolio:v1:isLoggedIn";

#[derive(Clone)]
pub struct AuthFlag {
    redis: RedisCache,
    forced: bool,
}

impl AuthFlag {
    pub fn new(redis: RedisCache, forced: bool) -> Self {
        Self { redis, forced }
    }

    pub async fn read(&self) -> bool {
        if self.forced {
            return true;
        }
        self.redis.get(FLAG_KEY).await.as_deref() == Some("true")
    }

    /// Resolves the context every section mounts with.
    pub async fn session_context(&self) -> SessionContext {
        let authoring = self.read().await;
        info!(authoring, forced = self.forced, "authoring flag resolved");
        SessionContext::new(authoring)
    }

    /// Removes the stored flag. Sections already mounted keep their gate until
    /// the next start.
    pub async fn clear(&self) -> bool {
        self.redis.delete(FLAG_KEY).await
    }
}
