//! Product Search Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::responses::ProductResponse};

/// Product Search Handler
///
/// Returns products whose title, slug, description, or categories contain the
/// query, ignoring case.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    query: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;
    let query = query.into_inner();

    let products = state
        .app
        .products
        .search_products(&query)
        .await
        .or_500("failed to search products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::products::MockProductStore;

    use crate::test_helpers::products_service;

    use super::{super::tests::make_record, *};

    fn make_service(store: MockProductStore) -> Service {
        products_service(
            store,
            Router::with_path("product/search/{query}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_search_forwards_query() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_search_products()
            .once()
            .withf(|query| query == "linen")
            .return_once(|_| Ok(vec![make_record(3, "Linen Shirt")]));

        let mut res = TestClient::get("http://example.com/product/search/linen")
            .send(&make_service(store))
            .await;

        let products: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(products.len(), 1, "expected a single match");
        assert_eq!(products.first().map(|p| p.id), Some(3));

        Ok(())
    }
}
