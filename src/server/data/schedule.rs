//! Schedule data repository.
//!
//! Team names are resolved here so handlers receive `ScheduleWithTeams` ready for the
//! client; soft-deleted teams still resolve since their schedules are kept.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ScheduleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::team::TeamRepository,
    model::schedule::{CreateScheduleParams, Schedule, ScheduleWithTeams, UpdateScheduleParams},
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a schedule with the given initial status.
    pub async fn create(
        &self,
        params: CreateScheduleParams,
        status: ScheduleStatus,
    ) -> Result<Schedule, DbErr> {
        let entity = entity::schedule::ActiveModel {
            host_team_id: ActiveValue::Set(params.host_team_id),
            invited_team_id: ActiveValue::Set(params.invited_team_id),
            created_by: ActiveValue::Set(params.created_by),
            match_type: ActiveValue::Set(params.match_type),
            place: ActiveValue::Set(params.place),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            vote_deadline: ActiveValue::Set(params.vote_deadline),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Schedule::from_entity))
    }

    /// Finds a schedule with its host and invited team names.
    pub async fn find_with_teams(&self, id: i32) -> Result<Option<ScheduleWithTeams>, DbErr> {
        let Some(schedule) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.attach_team_names(vec![schedule]).await?.pop())
    }

    /// Gets schedules a team hosts or is invited to, earliest start first.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<ScheduleWithTeams>, DbErr> {
        let schedules = entity::prelude::Schedule::find()
            .filter(
                Condition::any()
                    .add(entity::schedule::Column::HostTeamId.eq(team_id))
                    .add(entity::schedule::Column::InvitedTeamId.eq(team_id)),
            )
            .order_by_asc(entity::schedule::Column::StartTime)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Schedule::from_entity)
            .collect();

        self.attach_team_names(schedules).await
    }

    /// Updates place, description and the time window of a schedule.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The updated schedule
    /// - `Err(DbErr::RecordNotFound)` - No schedule with that ID
    pub async fn update(&self, params: UpdateScheduleParams) -> Result<Schedule, DbErr> {
        let mut active_model = self.find_active_model(params.id).await?;
        active_model.place = ActiveValue::Set(params.place);
        active_model.description = ActiveValue::Set(params.description);
        active_model.start_time = ActiveValue::Set(params.start_time);
        active_model.end_time = ActiveValue::Set(params.end_time);
        active_model.vote_deadline = ActiveValue::Set(params.vote_deadline);

        let entity = active_model.update(self.db).await?;
        Ok(Schedule::from_entity(entity))
    }

    pub async fn update_status(&self, id: i32, status: ScheduleStatus) -> Result<Schedule, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.status = ActiveValue::Set(status);

        let entity = active_model.update(self.db).await?;
        Ok(Schedule::from_entity(entity))
    }

    /// Deletes a schedule. Attendance, matches, lineups, goals and photos go with it
    /// through foreign key cascades.
    /// Deletes a schedule in one transaction. Attendance, matches and photo rows go with it
    /// through foreign key cascades.
    ///
    /// # Returns
    /// - `Ok(keys)` - Storage object keys of the photo rows that were removed
    /// - `Err(DbErr)` - Database error, nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let txn = self.db.begin().await?;

        let object_keys = entity::prelude::Photo::find()
            .filter(entity::photo::Column::ScheduleId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|photo| photo.object_key)
            .collect();

        entity::prelude::Schedule::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(object_keys)
    }

    /// Rejects every PENDING schedule whose start time is before `now`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of schedules that were rejected
    /// - `Err(DbErr)` - Database error during the update
    pub async fn reject_expired_pending(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Schedule::update_many()
            .filter(entity::schedule::Column::Status.eq(ScheduleStatus::Pending))
            .filter(entity::schedule::Column::StartTime.lt(now))
            .set(entity::schedule::ActiveModel {
                status: ActiveValue::Set(ScheduleStatus::Rejected),
                ..Default::default()
            })
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn attach_team_names(
        &self,
        schedules: Vec<Schedule>,
    ) -> Result<Vec<ScheduleWithTeams>, DbErr> {
        let mut team_ids: Vec<i32> = schedules
            .iter()
            .flat_map(|s| std::iter::once(s.host_team_id).chain(s.invited_team_id))
            .collect();
        team_ids.sort_unstable();
        team_ids.dedup();

        let names = TeamRepository::new(self.db).get_names(&team_ids).await?;

        Ok(schedules
            .into_iter()
            .map(|schedule| ScheduleWithTeams {
                host_team_name: names
                    .get(&schedule.host_team_id)
                    .cloned()
                    .unwrap_or_default(),
                invited_team_name: schedule
                    .invited_team_id
                    .and_then(|id| names.get(&id).cloned()),
                schedule,
            })
            .collect())
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::schedule::ActiveModel, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Schedule {} not found", id)))?;

        Ok(entity.into())
    }
}
