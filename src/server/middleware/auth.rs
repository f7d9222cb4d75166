//! Session-based access control for API handlers.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::{auth::AuthError, league::LeagueError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A permission an endpoint may demand of the logged-in user.
///
/// Admins satisfy every permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// League administrator.
    Admin,
    /// Owner of the team with the given id.
    TeamOwner(i32),
}

/// Resolves the session user and checks permissions against the database.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// An empty permission list only requires the user to be logged in.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    /// - `Err(LeagueError::TeamNotFound)` - `TeamOwner` names an unknown team
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.admin {
            return Ok(user);
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        "admin permission required".to_string(),
                    )
                    .into());
                }
                Permission::TeamOwner(team_id) => {
                    let Some(team) = TeamRepository::new(self.db).find_by_id(*team_id).await?
                    else {
                        return Err(LeagueError::TeamNotFound(*team_id).into());
                    };

                    if !team.is_owned_by(user_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("user does not own team {}", team_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
