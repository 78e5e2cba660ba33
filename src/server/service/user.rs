//! Onboarding and player profiles.

use entity::sea_orm_active_enums::PlayerPosition;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{attendance::AttendanceRepository, goal::GoalRepository, user::UserRepository},
    error::AppError,
    model::user::{PlayerStats, UpdateProfileParams, User, UserProfile},
};

const NICKNAME_MIN_CHARS: usize = 2;
const NICKNAME_MAX_CHARS: usize = 20;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Stores the player profile and marks the user onboarded.
    ///
    /// Running it again on an onboarded account simply updates the profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Nickname length out of range or already taken
    pub async fn complete_onboarding(
        &self,
        user_id: i32,
        nickname: String,
        position: PlayerPosition,
        region: Option<String>,
    ) -> Result<User, AppError> {
        let nickname = self.validate_nickname(user_id, &nickname).await?;

        let user = UserRepository::new(self.db)
            .update_profile(UpdateProfileParams {
                user_id,
                nickname: Some(nickname),
                position: Some(position),
                region: normalize(region),
                image: None,
                mark_onboarded: true,
            })
            .await?;

        tracing::info!("User {} completed onboarding", user.id);

        Ok(user)
    }

    /// Updates any subset of the profile fields.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user, or the stored user unchanged when no field was given
    /// - `Err(AppError::BadRequest)` - Invalid or taken nickname
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let nickname = match params.nickname.as_deref() {
            Some(nickname) => Some(self.validate_nickname(params.user_id, nickname).await?),
            None => None,
        };
        let params = UpdateProfileParams {
            nickname,
            region: normalize(params.region),
            image: normalize(params.image),
            ..params
        };

        if params.nickname.is_none()
            && params.position.is_none()
            && params.region.is_none()
            && params.image.is_none()
            && !params.mark_onboarded
        {
            return user_repo
                .find_by_id(params.user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()));
        }

        Ok(user_repo.update_profile(params).await?)
    }

    /// Gets a user's public profile with career statistics.
    pub async fn get_profile(&self, user_id: i32) -> Result<UserProfile, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let attendance_repo = AttendanceRepository::new(self.db);
        let attended_schedules = attendance_repo.count_attended_by_user(user_id).await?;
        let (mvp_votes, mvp_awards) = attendance_repo.get_mvp_totals_for_user(user_id).await?;
        let (goals, assists) = GoalRepository::new(self.db)
            .get_totals_for_user(user_id)
            .await?;

        Ok(UserProfile {
            user,
            stats: PlayerStats {
                attended_schedules,
                goals,
                assists,
                mvp_votes,
                mvp_awards,
            },
        })
    }

    async fn validate_nickname(&self, user_id: i32, nickname: &str) -> Result<String, AppError> {
        let nickname = validate_nickname_format(nickname)?;

        if UserRepository::new(self.db)
            .nickname_taken(&nickname, user_id)
            .await?
        {
            return Err(AppError::BadRequest("Nickname already taken".to_string()));
        }

        Ok(nickname)
    }
}

/// Trims a nickname and checks its length in characters.
pub fn validate_nickname_format(nickname: &str) -> Result<String, AppError> {
    let nickname = nickname.trim();
    let length = nickname.chars().count();

    if !(NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS).contains(&length) {
        return Err(AppError::BadRequest(format!(
            "Nickname must be between {} and {} characters",
            NICKNAME_MIN_CHARS, NICKNAME_MAX_CHARS
        )));
    }

    Ok(nickname.to_string())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
