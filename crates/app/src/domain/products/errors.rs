//! Product store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductStoreError {
    #[error("product not found")]
    NotFound,

    #[error("product slug {0:?} is already in use")]
    SlugTaken(String),
}
