use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Service for Discord OAuth2 authentication.
///
/// Handles the login redirect, the code exchange on callback and the user upsert that
/// follows. League membership itself is managed through player registration.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Only the `identify` scope is requested. Returns both the URL and the CSRF token for
    /// callback validation.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Handles OAuth2 callback and authenticates user.
    ///
    /// Exchanges the authorization code for an access token, fetches the user's Discord
    /// profile and creates or updates the user record. Admin status is only written when
    /// `set_admin` is true so regular logins never revoke it.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    /// - `set_admin` - Whether to grant admin privileges to this user
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with updated information
    /// - `Err(AppError::AuthErr)` - OAuth2 token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch user data from Discord API
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user.name,
                is_admin: set_admin.then_some(true),
            })
            .await?;

        if set_admin {
            tracing::info!("User {} has been set as admin", user.name)
        }

        Ok(user)
    }

    /// Retrieves the authenticated user's Discord profile from the `@me` endpoint.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
