//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::PlayerPosition;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Users are onboarded by default since almost every operation requires it; call
/// `onboarded(false)` to get a freshly signed-in account without a nickname.
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).admin(true).build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    provider_id: String,
    name: String,
    nickname: Option<String>,
    position: Option<PlayerPosition>,
    onboarded: bool,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - provider_id: `"provider_{id}"`
    /// - name: `"User {id}"`
    /// - nickname: `"player{id}"`
    /// - position: `ALA`
    /// - onboarded: `true`, admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            provider_id: format!("provider_{}", id),
            name: format!("User {}", id),
            nickname: Some(format!("player{}", id)),
            position: Some(PlayerPosition::Ala),
            onboarded: true,
            admin: false,
        }
    }

    pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nickname(mut self, nickname: Option<&str>) -> Self {
        self.nickname = nickname.map(str::to_string);
        self
    }

    /// Marks the user as onboarded or not. A user who is not onboarded has no nickname
    /// and no position.
    pub fn onboarded(mut self, onboarded: bool) -> Self {
        self.onboarded = onboarded;
        if !onboarded {
            self.nickname = None;
            self.position = None;
        }
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            provider_id: ActiveValue::Set(self.provider_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            nickname: ActiveValue::Set(self.nickname),
            position: ActiveValue::Set(self.position),
            region: ActiveValue::Set(None),
            is_onboarded: ActiveValue::Set(self.onboarded),
            is_admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an onboarded, non-admin user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
