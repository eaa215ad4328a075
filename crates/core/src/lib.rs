//! Shopfront
//!
//! Declarative schemas for the product payloads accepted by the shopfront
//! service, and the validator that turns raw JSON into typed values or a full
//! list of field-level errors.

pub mod errors;
pub mod path;
pub mod payloads;
pub mod schema;
pub mod validator;

pub use errors::{ExpectedKind, FieldError, JsonType, Rule, ValidationErrors};
pub use path::{FieldPath, PathSegment};
pub use payloads::{
    FormField, FormFieldType, NewProduct, Payload, ProductUpdate, Scalar, Validated, Variation,
};
pub use schema::SchemaName;
pub use validator::{check, validate, validate_as};
