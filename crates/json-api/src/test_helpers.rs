//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{
    auth::MockAuthService, context::AppContext, domain::products::MockProductStore,
};

use crate::state::State;

fn state(products: MockProductStore, auth: MockAuthService) -> Arc<State> {
    State::shared(AppContext::new(Arc::new(products), Arc::new(auth)))
}

/// Auth mock that fails the test if the guard consults it.
fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductStore {
    let mut products = MockProductStore::new();

    products.expect_list_products().never();
    products.expect_search_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_products_mock(), auth)
}

/// Serve `route` with the given store and no auth guard.
pub(crate) fn products_service(products: MockProductStore, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_auth_mock())))
            .push(route),
    )
}

/// Serve the full application router with the given mocks.
pub(crate) fn app_service(products: MockProductStore, auth: MockAuthService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, auth)))
            .push(crate::router::app_router()),
    )
}
