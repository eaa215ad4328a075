//! API token secrets.

use std::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// An accepted bearer token. The bytes are wiped when the token is dropped and
/// never appear in debug output.
#[derive(Clone)]
pub struct ApiToken {
    bytes: Vec<u8>,
}

impl ApiToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bytes: token.into().into_bytes(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Compares against a presented token in constant time.
    ///
    /// A length mismatch still runs a full-width comparison against the stored
    /// secret before rejecting.
    #[must_use]
    pub fn ct_matches(&self, candidate: &str) -> Choice {
        let candidate = candidate.as_bytes();

        if candidate.len() != self.bytes.len() {
            let _ = self.bytes.as_slice().ct_eq(self.bytes.as_slice());

            return Choice::from(0);
        }

        self.bytes.as_slice().ct_eq(candidate)
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.ct_matches(candidate).into()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(**redacted**)")
    }
}

impl Drop for ApiToken {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
