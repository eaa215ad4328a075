//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("api token not recognised")]
    NotFound,

    #[error("no api tokens are configured")]
    NoTokensConfigured,
}
