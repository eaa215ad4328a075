//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use shopfront_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductResponse},
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state()?;

    let product = state
        .app
        .products
        .get_product(ProductId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::products::{MockProductStore, ProductStoreError};

    use crate::test_helpers::products_service;

    use super::{super::tests::make_record, *};

    fn make_service(store: MockProductStore) -> Service {
        products_service(store, Router::with_path("product/{id:num}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_get_product()
            .once()
            .withf(|id| *id == ProductId::new(7))
            .return_once(|_| Ok(make_record(7, "Linen Shirt")));

        let mut res = TestClient::get("http://example.com/product/7")
            .send(&make_service(store))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], json!(7));
        assert_eq!(body["slug"], json!("linen-shirt"));
        assert_eq!(body["variations"][0]["price"], json!(1999));
        assert_eq!(body["form"][0]["type"], json!("text"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductStoreError::NotFound));

        let res = TestClient::get("http://example.com/product/404")
            .send(&make_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_does_not_match() -> TestResult {
        let mut store = MockProductStore::new();

        store.expect_get_product().never();

        let res = TestClient::get("http://example.com/product/abc")
            .send(&make_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
