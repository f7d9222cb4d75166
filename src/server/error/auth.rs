use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session; the user is not logged in.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(u64),

    /// User is logged in but lacks a required permission.
    ///
    /// The second field is a server-side description of the denied action and is only logged.
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth authorization code for a token failed.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),

    /// Missing or wrong `x-admin-key` header on a key-guarded endpoint.
    #[error("Invalid admin verification key")]
    InvalidAdminKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Messages returned to clients stay generic; the detailed error is logged at debug level.
///
/// # Returns
/// - 400 Bad Request - CSRF and token exchange failures
/// - 401 Unauthorized - Not logged in, unknown session user, bad admin key
/// - 403 Forbidden - Missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in.")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action.",
            ),
            Self::InvalidAdminKey => (StatusCode::UNAUTHORIZED, "Invalid admin key."),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
