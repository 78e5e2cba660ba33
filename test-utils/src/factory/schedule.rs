//! Schedule factory for creating test schedules.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{MatchType, ScheduleStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for schedules.
///
/// Defaults to a CONFIRMED squad schedule starting in two days with the attendance vote
/// closing one day from now, so votes are accepted out of the box.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    host_team_id: i32,
    created_by: i32,
    invited_team_id: Option<i32>,
    match_type: MatchType,
    status: ScheduleStatus,
    start_time: DateTime<Utc>,
    vote_deadline: DateTime<Utc>,
}

impl<'a> ScheduleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, host_team_id: i32, created_by: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            host_team_id,
            created_by,
            invited_team_id: None,
            match_type: MatchType::Squad,
            status: ScheduleStatus::Confirmed,
            start_time: now + Duration::days(2),
            vote_deadline: now + Duration::days(1),
        }
    }

    pub fn invited_team_id(mut self, invited_team_id: Option<i32>) -> Self {
        self.invited_team_id = invited_team_id;
        self
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    pub fn status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn vote_deadline(mut self, vote_deadline: DateTime<Utc>) -> Self {
        self.vote_deadline = vote_deadline;
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            host_team_id: ActiveValue::Set(self.host_team_id),
            invited_team_id: ActiveValue::Set(self.invited_team_id),
            created_by: ActiveValue::Set(self.created_by),
            match_type: ActiveValue::Set(self.match_type),
            place: ActiveValue::Set("Futsal Park Court 1".to_string()),
            description: ActiveValue::Set(None),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + Duration::hours(2)),
            vote_deadline: ActiveValue::Set(self.vote_deadline),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default squad schedule for `host_team_id`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    host_team_id: i32,
    created_by: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, host_team_id, created_by)
        .build()
        .await
}
