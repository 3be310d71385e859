use crate::{AuthError, Result as AuthErrorResult, Strategy};

use ident_core::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use log::info;

/// Strategies available to the HTTP layer.
///
/// Filled once at startup, then shared read-only.
#[derive(Default, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its name, replacing any previous one.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) {
        let name = strategy.name().to_string();
        info!("Registered sign-in strategy: {}", name);
        self.strategies.insert(name, strategy);
    }

    #[track_caller]
    pub fn get(&self, name: &str) -> AuthErrorResult<Arc<dyn Strategy>> {
        self.strategies
            .get(name)
            .cloned()
            .ok_or_else(|| AuthError::UnknownStrategy {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }
}
