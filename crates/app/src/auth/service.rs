//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use subtle::Choice;

use crate::auth::{ApiToken, AuthServiceError};

/// Allows requests bearing one of a fixed set of API tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthService {
    tokens: Vec<ApiToken>,
}

impl StaticTokenAuthService {
    /// Builds the service from raw tokens. Blank entries are ignored.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| ApiToken::new(token.as_ref().trim()))
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl AuthService for StaticTokenAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        if self.tokens.is_empty() {
            return Err(AuthServiceError::NoTokensConfigured);
        }

        // Every configured token is compared so timing does not reveal which one matched.
        let matched = self
            .tokens
            .iter()
            .fold(Choice::from(0), |matched, token| {
                matched | token.ct_matches(bearer_token)
            });

        if bool::from(matched) {
            Ok(())
        } else {
            Err(AuthServiceError::NotFound)
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Succeeds when `bearer_token` is allowed to perform mutating operations.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}
