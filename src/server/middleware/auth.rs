//! Request authorization.
//!
//! `AuthGuard` resolves the session user and checks a list of `Permission`s against it.
//! Team-scoped permissions look up the caller's membership row; admins pass every team
//! check.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{team_member::TeamMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{team::TeamMember, user::User},
};

pub enum Permission {
    /// Site administrator.
    Admin,
    /// Finished onboarding (nickname and position set).
    Onboarded,
    /// Approved member of the team, any role.
    TeamMember(i32),
    /// Approved OWNER or MANAGER of the team.
    TeamManager(i32),
    /// OWNER of the team.
    TeamOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the session user when every permission holds.
    ///
    /// # Returns
    /// - `Ok(User)` - Signed-in user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::NotOnboarded)` - `Permission::Onboarded` failed
    /// - `Err(AuthError::AccessDenied)` - Any other permission failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            self.check(&user, permission).await?;
        }

        Ok(user)
    }

    /// Resolves the session user without requiring a login.
    ///
    /// A session pointing at a user that no longer exists is an error, not an anonymous
    /// request.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(user) => Ok(Some(user)),
            None => Err(AuthError::UserNotInDatabase(user_id).into()),
        }
    }

    async fn check(&self, user: &User, permission: &Permission) -> Result<(), AppError> {
        match permission {
            Permission::Admin => {
                if !user.is_admin {
                    return Err(
                        AuthError::AccessDenied(user.id, "admin required".to_string()).into(),
                    );
                }
            }
            Permission::Onboarded => {
                if !user.is_onboarded {
                    return Err(AuthError::NotOnboarded(user.id).into());
                }
            }
            Permission::TeamMember(team_id) => {
                self.check_team(user, *team_id, "approved membership", TeamMember::is_approved)
                    .await?;
            }
            Permission::TeamManager(team_id) => {
                self.check_team(user, *team_id, "owner or manager role", TeamMember::can_manage)
                    .await?;
            }
            Permission::TeamOwner(team_id) => {
                self.check_team(user, *team_id, "owner role", TeamMember::is_owner)
                    .await?;
            }
        }

        Ok(())
    }

    async fn check_team(
        &self,
        user: &User,
        team_id: i32,
        requirement: &str,
        allowed: fn(&TeamMember) -> bool,
    ) -> Result<(), AppError> {
        if user.is_admin {
            return Ok(());
        }

        let membership = TeamMemberRepository::new(self.db)
            .find(team_id, user.id)
            .await?;

        if membership.as_ref().is_some_and(allowed) {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("{} required in team {}", requirement, team_id),
        )
        .into())
    }
}
