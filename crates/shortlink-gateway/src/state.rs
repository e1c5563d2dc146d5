use std::sync::Arc;

use shortlink_core::{KeyValueStore, Resolver, Shortener};
use shortlink_engine::{ResolverService, ShortenerService};

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    resolver: Arc<dyn Resolver>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            shortener,
            resolver,
        }
    }

    /// Builds both engines on one shared store.
    pub fn from_store<S: KeyValueStore + Clone>(store: S) -> Self {
        Self::new(
            Arc::new(ShortenerService::new(store.clone())),
            Arc::new(ResolverService::new(store)),
        )
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }
}
