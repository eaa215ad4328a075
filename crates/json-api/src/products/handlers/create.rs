//! Create Product Handler

use salvo::{http::header::LOCATION, prelude::*};
use serde_json::Value;

use shopfront::NewProduct;

use crate::{
    extensions::*,
    products::{
        errors::{ApiError, validated},
        responses::ProductResponse,
    },
};

/// Create Product Handler
///
/// Validates the body as a new product and stores it. The slug is derived from
/// the title when omitted.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Slug already in use"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid API token"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.state()?;

    let body: Value = req
        .parse_json()
        .await
        .or_400("Request body is not valid JSON")?;

    let product = validated::<NewProduct>(&body)?;

    let created = state.app.products.create_product(product).await?;

    res.add_header(LOCATION, format!("/product/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
