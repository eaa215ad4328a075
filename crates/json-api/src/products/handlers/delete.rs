//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use shopfront_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductDeletedResponse},
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid API token"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.state()?;
    let product = ProductId::new(id.into_inner());

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductDeletedResponse {
        deleted: product.into(),
    }))
}
