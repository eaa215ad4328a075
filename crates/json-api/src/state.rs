//! Shared server state

use std::sync::Arc;

use jiff::Timestamp;

use shopfront_app::context::AppContext;

/// Injected into every request's depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) started_at: Timestamp,
}

impl State {
    pub(crate) fn new(app: AppContext) -> Self {
        Self {
            app,
            started_at: Timestamp::now(),
        }
    }

    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
