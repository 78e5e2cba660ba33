//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records: the upsert run on
//! every OAuth login, profile updates from onboarding, and lookups used for display names.

use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{display_name, UpdateProfileParams, UpsertUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user by provider ID.
    ///
    /// Inserts a new user or refreshes an existing user's name, email and image. The admin
    /// column is only written when `is_admin` is `Some(true)`, so a regular login never
    /// clears admin privileges.
    ///
    /// # Arguments
    /// - `param` - Identity reported by the OAuth provider
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let grant_admin = param.is_admin == Some(true);

        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Email,
            entity::user::Column::Image,
        ];
        if grant_admin {
            update_columns.push(entity::user::Column::IsAdmin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            provider_id: ActiveValue::Set(param.provider_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            image: ActiveValue::Set(param.image),
            nickname: ActiveValue::Set(None),
            position: ActiveValue::Set(None),
            region: ActiveValue::Set(None),
            is_onboarded: ActiveValue::Set(false),
            is_admin: ActiveValue::Set(grant_admin),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ProviderId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether to issue an admin bootstrap code.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Checks whether a nickname is already used by another user.
    ///
    /// # Arguments
    /// - `nickname` - Trimmed nickname to check
    /// - `exclude_user_id` - User allowed to keep the nickname (the one updating their profile)
    pub async fn nickname_taken(
        &self,
        nickname: &str,
        exclude_user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .filter(entity::user::Column::Id.ne(exclude_user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes profile fields, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {} not found", params.user_id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(nickname) = params.nickname {
            active_model.nickname = ActiveValue::Set(Some(nickname));
        }
        if let Some(position) = params.position {
            active_model.position = ActiveValue::Set(Some(position));
        }
        if let Some(region) = params.region {
            active_model.region = ActiveValue::Set(Some(region));
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if params.mark_onboarded {
            active_model.is_onboarded = ActiveValue::Set(true);
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Gets display names for a set of users.
    ///
    /// Missing IDs are simply absent from the returned map.
    pub async fn get_display_names(&self, user_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|u| (u.id, display_name(u.nickname, u.name)))
            .collect())
    }
}
