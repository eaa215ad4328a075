//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, StaticTokenAuthService},
    domain::products::{InMemoryProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductStore>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>, auth: Arc<dyn AuthService>) -> Self {
        Self { products, auth }
    }

    /// Build application context backed by an in-memory product store, accepting
    /// the given API tokens for mutating requests.
    #[must_use]
    pub fn in_memory<I, S>(api_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            Arc::new(InMemoryProductStore::new()),
            Arc::new(StaticTokenAuthService::new(api_tokens)),
        )
    }
}
