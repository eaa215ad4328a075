//! Product Errors

use salvo::{
    oapi::{Components, EndpointOutRegister, Operation, Response as OapiResponse},
    prelude::*,
    writing::Scribe,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use shopfront::{Payload, ValidationErrors, validate_as};
use shopfront_app::domain::products::ProductStoreError;

use crate::observability::observe_validation_failure;

/// Failure of a product handler.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// Rendered as a plain status error.
    Status(StatusError),

    /// Rendered as a 400 listing every rejected field.
    Validation(ValidationErrors),
}

impl From<StatusError> for ApiError {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

impl From<ProductStoreError> for ApiError {
    fn from(error: ProductStoreError) -> Self {
        Self::Status(into_status_error(error))
    }
}

#[derive(Debug, Serialize)]
struct ValidationFailure<'a> {
    message: &'static str,
    errors: &'a ValidationErrors,
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Status(error) => {
                res.status_code(error.code);
                res.render(error);
            }
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(ValidationFailure {
                    message: "validation failed",
                    errors: &errors,
                }));
            }
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);

        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            OapiResponse::new("Payload failed validation; every rejected field is listed"),
        );
    }
}

pub(crate) fn into_status_error(error: ProductStoreError) -> StatusError {
    match error {
        ProductStoreError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductStoreError::SlugTaken(slug) => {
            StatusError::conflict().brief(format!("Product slug {slug:?} is already in use"))
        }
    }
}

/// Check a request body against `T`'s schema and read it into `T`.
pub(crate) fn validated<T: Payload>(body: &Value) -> Result<T, ApiError> {
    validate_as::<T>(body).map_err(|errors| {
        debug!(schema = T::SCHEMA.name, %errors, "rejected product payload");

        observe_validation_failure(T::SCHEMA.name, &errors);

        ApiError::Validation(errors)
    })
}
