//! Attendance voting for schedules.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AttendanceStatus, MatchType};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, schedule::ScheduleRepository,
        team_member::TeamMemberRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        attendance::{Attendance, AttendanceSummary, VoteAttendanceParams},
        schedule::Schedule,
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the caller's attendance vote.
    ///
    /// The caller votes for the host team when approved there, otherwise for the invited
    /// team of a TEAM fixture. Votes close at the schedule's vote deadline.
    ///
    /// # Arguments
    /// - `schedule_id` - Schedule being voted on
    /// - `user_id` - Voting user
    /// - `status` - ATTEND, ABSENT or UNDECIDED
    /// - `now` - Current time, compared against the vote deadline
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored vote
    /// - `Err(AppError::NotFound)` - Schedule does not exist
    /// - `Err(AppError::BadRequest)` - Schedule not open for votes or deadline passed
    /// - `Err(AuthError::AccessDenied)` - Caller is not an approved member of either team
    pub async fn vote(
        &self,
        schedule_id: i32,
        user_id: i32,
        status: AttendanceStatus,
        now: DateTime<Utc>,
    ) -> Result<Attendance, AppError> {
        let schedule = ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

        if !schedule.is_active() {
            return Err(AppError::BadRequest(
                "This schedule is not open for attendance votes".to_string(),
            ));
        }
        if now >= schedule.vote_deadline {
            return Err(AppError::BadRequest(
                "The vote deadline has passed".to_string(),
            ));
        }

        let team_id = self.voting_side(&schedule, user_id).await?;

        Ok(AttendanceRepository::new(self.db)
            .upsert_vote(VoteAttendanceParams {
                schedule_id,
                user_id,
                team_id,
                status,
            })
            .await?)
    }

    pub async fn get_attendance(&self, schedule_id: i32) -> Result<AttendanceSummary, AppError> {
        if ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Schedule not found".to_string()));
        }

        let records = AttendanceRepository::new(self.db)
            .get_by_schedule_with_users(schedule_id)
            .await?;

        Ok(AttendanceSummary::from_records(records))
    }

    /// Resolves the team a user votes for. Host membership wins for users in both teams.
    async fn voting_side(&self, schedule: &Schedule, user_id: i32) -> Result<i32, AppError> {
        if self.is_approved_member(schedule.host_team_id, user_id).await? {
            return Ok(schedule.host_team_id);
        }

        if schedule.match_type == MatchType::Team {
            if let Some(invited) = schedule.invited_team_id {
                if self.is_approved_member(invited, user_id).await? {
                    return Ok(invited);
                }
            }
        }

        Err(AuthError::AccessDenied(
            user_id,
            format!(
                "vote attendance for schedule {} without membership in its teams",
                schedule.id
            ),
        )
        .into())
    }

    async fn is_approved_member(&self, team_id: i32, user_id: i32) -> Result<bool, AppError> {
        Ok(TeamMemberRepository::new(self.db)
            .find(team_id, user_id)
            .await?
            .is_some_and(|m| m.is_approved()))
    }
}
