//! Attendance data repository.
//!
//! One `schedule_attendance` row per user and schedule holds both the attendance vote and
//! the MVP ballot, so MVP voting is implemented here as well.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    attendance::{Attendance, AttendanceWithUser, VoteAttendanceParams},
    user::display_name,
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, schedule_id: i32, user_id: i32) -> Result<Option<Attendance>, DbErr> {
        let entity = find_entity(self.db, schedule_id, user_id).await?;

        Ok(entity.map(Attendance::from_entity))
    }

    /// Records a user's attendance vote, creating the row on first vote.
    ///
    /// Changing an existing vote only touches status, team and timestamp; MVP ballots and
    /// tallies are kept.
    pub async fn upsert_vote(&self, params: VoteAttendanceParams) -> Result<Attendance, DbErr> {
        let now = Utc::now();

        let entity = match find_entity(self.db, params.schedule_id, params.user_id).await? {
            Some(existing) => {
                let mut active_model: entity::schedule_attendance::ActiveModel = existing.into();
                active_model.status = ActiveValue::Set(params.status);
                active_model.team_id = ActiveValue::Set(params.team_id);
                active_model.updated_at = ActiveValue::Set(now);
                active_model.update(self.db).await?
            }
            None => {
                entity::schedule_attendance::ActiveModel {
                    schedule_id: ActiveValue::Set(params.schedule_id),
                    user_id: ActiveValue::Set(params.user_id),
                    team_id: ActiveValue::Set(params.team_id),
                    status: ActiveValue::Set(params.status),
                    mvp_target_id: ActiveValue::Set(None),
                    mvp_count: ActiveValue::Set(0),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Attendance::from_entity(entity))
    }

    /// Gets all attendance rows of a schedule with the voters' display names.
    pub async fn get_by_schedule_with_users(
        &self,
        schedule_id: i32,
    ) -> Result<Vec<AttendanceWithUser>, DbErr> {
        let rows = entity::prelude::ScheduleAttendance::find()
            .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(entity::schedule_attendance::Column::UpdatedAt)
            .order_by_asc(entity::schedule_attendance::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(attendance, user)| {
                user.map(|user| AttendanceWithUser {
                    attendance: Attendance::from_entity(attendance),
                    user_name: display_name(user.nickname, user.name),
                })
            })
            .collect())
    }

    /// Checks whether at least one member of `team_id` voted ATTEND for the schedule.
    pub async fn team_has_attendees(&self, schedule_id: i32, team_id: i32) -> Result<bool, DbErr> {
        team_has_attendees(self.db, schedule_id, team_id).await
    }

    /// Gets the IDs of users who voted ATTEND for the schedule.
    pub async fn get_attending_user_ids(&self, schedule_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::ScheduleAttendance::find()
            .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::schedule_attendance::Column::Status.eq(AttendanceStatus::Attend))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.user_id).collect())
    }

    /// Moves a voter's MVP ballot to `target_id` in one transaction.
    ///
    /// The previous target (if any) loses a vote, never going below zero, and the new target
    /// gains one. Voting for the current target again changes nothing.
    ///
    /// # Returns
    /// - `Ok(())` - Ballot recorded
    /// - `Err(DbErr::RecordNotFound)` - The voter has no attendance row for the schedule
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn vote_mvp(
        &self,
        schedule_id: i32,
        voter_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let voter = find_entity(&txn, schedule_id, voter_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Attendance of user {} for schedule {} not found",
                    voter_id, schedule_id
                ))
            })?;

        if voter.mvp_target_id == Some(target_id) {
            txn.commit().await?;
            return Ok(());
        }

        if let Some(previous) = voter.mvp_target_id {
            entity::prelude::ScheduleAttendance::update_many()
                .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
                .filter(entity::schedule_attendance::Column::UserId.eq(previous))
                .filter(entity::schedule_attendance::Column::MvpCount.gt(0))
                .col_expr(
                    entity::schedule_attendance::Column::MvpCount,
                    Expr::col(entity::schedule_attendance::Column::MvpCount).sub(1),
                )
                .exec(&txn)
                .await?;
        }

        let mut active_model: entity::schedule_attendance::ActiveModel = voter.into();
        active_model.mvp_target_id = ActiveValue::Set(Some(target_id));
        active_model.update(&txn).await?;

        entity::prelude::ScheduleAttendance::update_many()
            .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::schedule_attendance::Column::UserId.eq(target_id))
            .col_expr(
                entity::schedule_attendance::Column::MvpCount,
                Expr::col(entity::schedule_attendance::Column::MvpCount).add(1),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Gets MVP vote counts per user for a schedule, with display names.
    pub async fn get_mvp_counts(&self, schedule_id: i32) -> Result<Vec<(i32, String, i32)>, DbErr> {
        Ok(self
            .get_by_schedule_with_users(schedule_id)
            .await?
            .into_iter()
            .map(|row| (row.attendance.user_id, row.user_name, row.attendance.mvp_count))
            .collect())
    }

    /// Counts the schedules a user voted to attend.
    pub async fn count_attended_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ScheduleAttendance::find()
            .filter(entity::schedule_attendance::Column::UserId.eq(user_id))
            .filter(entity::schedule_attendance::Column::Status.eq(AttendanceStatus::Attend))
            .count(self.db)
            .await
    }

    /// Gets a user's MVP totals.
    ///
    /// # Returns
    /// - `Ok((votes, awards))` - Votes received across all schedules, and the number of
    ///   schedules where the user alone had the highest count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_mvp_totals_for_user(&self, user_id: i32) -> Result<(u64, u64), DbErr> {
        let own_rows = entity::prelude::ScheduleAttendance::find()
            .filter(entity::schedule_attendance::Column::UserId.eq(user_id))
            .filter(entity::schedule_attendance::Column::MvpCount.gt(0))
            .all(self.db)
            .await?;

        let votes: u64 = own_rows.iter().map(|r| r.mvp_count.max(0) as u64).sum();
        if own_rows.is_empty() {
            return Ok((0, 0));
        }

        let schedule_ids: Vec<i32> = own_rows.iter().map(|r| r.schedule_id).collect();
        let rivals = entity::prelude::ScheduleAttendance::find()
            .filter(entity::schedule_attendance::Column::ScheduleId.is_in(schedule_ids))
            .filter(entity::schedule_attendance::Column::UserId.ne(user_id))
            .all(self.db)
            .await?;

        let mut best_rival: HashMap<i32, i32> = HashMap::new();
        for rival in rivals {
            let best = best_rival.entry(rival.schedule_id).or_insert(0);
            *best = (*best).max(rival.mvp_count);
        }

        let awards = own_rows
            .iter()
            .filter(|row| row.mvp_count > best_rival.get(&row.schedule_id).copied().unwrap_or(0))
            .count() as u64;

        Ok((votes, awards))
    }
}

async fn find_entity<C: ConnectionTrait>(
    conn: &C,
    schedule_id: i32,
    user_id: i32,
) -> Result<Option<entity::schedule_attendance::Model>, DbErr> {
    entity::prelude::ScheduleAttendance::find()
        .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
        .filter(entity::schedule_attendance::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Connection-generic form of [`AttendanceRepository::team_has_attendees`], for use inside
/// another repository's transaction.
pub async fn team_has_attendees<C: ConnectionTrait>(
    conn: &C,
    schedule_id: i32,
    team_id: i32,
) -> Result<bool, DbErr> {
    let count = entity::prelude::ScheduleAttendance::find()
        .filter(entity::schedule_attendance::Column::ScheduleId.eq(schedule_id))
        .filter(entity::schedule_attendance::Column::TeamId.eq(team_id))
        .filter(entity::schedule_attendance::Column::Status.eq(AttendanceStatus::Attend))
        .count(conn)
        .await?;

    Ok(count > 0)
}
