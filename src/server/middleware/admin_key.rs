//! Shared-secret guard for machine-triggered endpoints such as the cron hooks.

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::server::error::{auth::AuthError, AppError};

/// Header carrying the admin verification key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub struct AdminKeyGuard<'a> {
    expected: Option<&'a str>,
}

impl<'a> AdminKeyGuard<'a> {
    /// Creates a guard for the configured key. With no key configured every request is rejected.
    pub fn new(expected: Option<&'a str>) -> Self {
        Self { expected }
    }

    /// Checks the `x-admin-key` header against the configured key.
    ///
    /// # Returns
    /// - `Ok(())` - Header present and matching
    /// - `Err(AuthError::InvalidAdminKey)` - Header missing, wrong, or no key configured
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let provided = headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match provided {
            Some(provided) if self.matches(provided) => Ok(()),
            _ => Err(AuthError::InvalidAdminKey.into()),
        }
    }

    /// Checks a key passed outside of headers, such as the login query string.
    ///
    /// Comparison runs in constant time for keys of equal length.
    pub fn matches(&self, provided: &str) -> bool {
        match self.expected {
            Some(expected) if !expected.is_empty() => {
                expected.as_bytes().ct_eq(provided.as_bytes()).into()
            }
            _ => false,
        }
    }
}
