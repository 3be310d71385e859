use ident_auth::{SessionCodec, StrategyRegistry};

use std::sync::Arc;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StrategyRegistry>,
    pub sessions: Arc<SessionCodec>,
    /// Add `Secure` to cookies we set
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(registry: StrategyRegistry, sessions: SessionCodec, secure_cookies: bool) -> Self {
        Self {
            registry: Arc::new(registry),
            sessions: Arc::new(sessions),
            secure_cookies,
        }
    }
}
