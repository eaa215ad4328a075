//! App Router

use salvo::Router;

use crate::{auth, products};

/// Product routes. Reads are public; writes go through the bearer token guard.
pub(crate) fn app_router() -> Router {
    Router::with_path("product")
        .get(products::index::handler)
        .push(Router::with_path("search/{query}").get(products::search::handler))
        .push(Router::with_path("{id:num}").get(products::get::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id:num}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
