//! Attendance factory for schedule attendance records.

use chrono::Utc;
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    schedule_id: i32,
    user_id: i32,
    team_id: i32,
    status: AttendanceStatus,
    mvp_target_id: Option<i32>,
    mvp_count: i32,
}

impl<'a> AttendanceFactory<'a> {
    /// Defaults to an ATTEND record without MVP votes.
    pub fn new(db: &'a DatabaseConnection, schedule_id: i32, user_id: i32, team_id: i32) -> Self {
        Self {
            db,
            schedule_id,
            user_id,
            team_id,
            status: AttendanceStatus::Attend,
            mvp_target_id: None,
            mvp_count: 0,
        }
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn mvp_target_id(mut self, mvp_target_id: Option<i32>) -> Self {
        self.mvp_target_id = mvp_target_id;
        self
    }

    pub fn mvp_count(mut self, mvp_count: i32) -> Self {
        self.mvp_count = mvp_count;
        self
    }

    pub async fn build(self) -> Result<entity::schedule_attendance::Model, DbErr> {
        entity::schedule_attendance::ActiveModel {
            schedule_id: ActiveValue::Set(self.schedule_id),
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(self.team_id),
            status: ActiveValue::Set(self.status),
            mvp_target_id: ActiveValue::Set(self.mvp_target_id),
            mvp_count: ActiveValue::Set(self.mvp_count),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ATTEND record for `user_id` on `schedule_id`.
pub async fn create_attendance(
    db: &DatabaseConnection,
    schedule_id: i32,
    user_id: i32,
    team_id: i32,
) -> Result<entity::schedule_attendance::Model, DbErr> {
    AttendanceFactory::new(db, schedule_id, user_id, team_id)
        .build()
        .await
}
