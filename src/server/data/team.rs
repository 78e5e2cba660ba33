//! Team data repository.
//!
//! Handles team rows and the owner membership created alongside them. Membership
//! management beyond creation lives in `TeamMemberRepository`.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{TeamMemberRole, TeamMemberStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::team::{CreateTeamParams, Team, UpdateTeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team and the creator's OWNER membership in one transaction.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            region: ActiveValue::Set(params.region),
            logo_url: ActiveValue::Set(params.logo_url),
            owner_id: ActiveValue::Set(params.owner_id),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(params.owner_id),
            role: ActiveValue::Set(TeamMemberRole::Owner),
            status: ActiveValue::Set(TeamMemberStatus::Approved),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Team::from_entity(team))
    }

    /// Finds a team by ID, including soft-deleted teams.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds a team by ID, treating soft-deleted teams as missing.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        Ok(self.find_by_id(id).await?.filter(|team| !team.is_deleted))
    }

    /// Checks whether a non-deleted team already uses the name.
    ///
    /// # Arguments
    /// - `name` - Trimmed team name
    /// - `exclude_id` - Team allowed to keep the name (the one being renamed)
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::IsDeleted.eq(false));

        if let Some(id) = exclude_id {
            query = query.filter(entity::team::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets non-deleted teams, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of teams per page
    ///
    /// # Returns
    /// - `Ok((teams, total))` - Teams for the page and the total number of non-deleted teams
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Team>, u64), DbErr> {
        let paginator = entity::prelude::Team::find()
            .filter(entity::team::Column::IsDeleted.eq(false))
            .order_by_desc(entity::team::Column::CreatedAt)
            .order_by_desc(entity::team::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let teams = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Team::from_entity)
            .collect();

        Ok((teams, total))
    }

    /// Counts approved members for each of the given teams.
    ///
    /// Teams without approved members map to zero.
    pub async fn member_counts(&self, team_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts: HashMap<i32, u64> = team_ids.iter().map(|id| (*id, 0)).collect();
        if team_ids.is_empty() {
            return Ok(counts);
        }

        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.is_in(team_ids.to_vec()))
            .filter(entity::team_member::Column::Status.eq(TeamMemberStatus::Approved))
            .all(self.db)
            .await?;

        for member in members {
            *counts.entry(member.team_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Gets team names by ID, including soft-deleted teams.
    pub async fn get_names(&self, team_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if team_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
    }

    /// Updates a team's editable fields.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(DbErr::RecordNotFound)` - No team with that ID
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Team {} not found", params.id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.region = ActiveValue::Set(params.region);
        active_model.logo_url = ActiveValue::Set(params.logo_url);

        let team = active_model.update(self.db).await?;

        Ok(Team::from_entity(team))
    }

    /// Checks whether anything still references the team.
    ///
    /// Schedules the team hosted or was invited to, board posts (deleted ones included) and
    /// photos all count. A team with dependents must be soft-deleted so that deleting the
    /// row does not cascade through them.
    pub async fn has_dependents(&self, team_id: i32) -> Result<bool, DbErr> {
        let schedules = entity::prelude::Schedule::find()
            .filter(
                Condition::any()
                    .add(entity::schedule::Column::HostTeamId.eq(team_id))
                    .add(entity::schedule::Column::InvitedTeamId.eq(team_id)),
            )
            .count(self.db)
            .await?;
        if schedules > 0 {
            return Ok(true);
        }

        let posts = entity::prelude::Post::find()
            .filter(entity::post::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;
        if posts > 0 {
            return Ok(true);
        }

        let photos = entity::prelude::Photo::find()
            .filter(entity::photo::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(photos > 0)
    }

    /// Marks a team as deleted, keeping the row for schedules that reference it.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .filter(entity::team::Column::Id.eq(id))
            .col_expr(
                entity::team::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Permanently deletes a team. Memberships are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
