//! Update Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use serde_json::Value;

use shopfront::ProductUpdate;
use shopfront_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{
        errors::{ApiError, validated},
        responses::ProductResponse,
    },
};

/// Product Update Handler
///
/// Replaces every field of an existing product. Unlike creation, the slug is
/// required.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Slug already in use"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid API token"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty, slug = tracing::field::Empty)
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.state()?;
    let product = ProductId::new(id.into_inner());

    let body: Value = req
        .parse_json()
        .await
        .or_400("Request body is not valid JSON")?;

    let update = validated::<ProductUpdate>(&body)?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("slug", tracing::field::display(&update.slug));

    let updated = state.app.products.update_product(product, update).await?;

    Ok(Json(updated.into()))
}
