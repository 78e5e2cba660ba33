//! MVP voting among a schedule's attendees.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{attendance::AttendanceRepository, schedule::ScheduleRepository},
    error::AppError,
    model::attendance::{MvpEntry, MvpResult},
};

pub struct MvpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MvpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Casts or moves the voter's MVP ballot and returns the updated standings.
    ///
    /// # Returns
    /// - `Ok(MvpResult)` - Standings after the vote
    /// - `Err(AppError::NotFound)` - Schedule does not exist
    /// - `Err(AppError::BadRequest)` - Voting not open, self vote, or voter or target did
    ///   not vote to attend
    pub async fn vote(
        &self,
        schedule_id: i32,
        voter_id: i32,
        target_id: i32,
    ) -> Result<MvpResult, AppError> {
        let schedule = ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

        if !schedule.accepts_mvp_votes() {
            return Err(AppError::BadRequest(
                "MVP voting opens once a match has been recorded".to_string(),
            ));
        }
        if voter_id == target_id {
            return Err(AppError::BadRequest(
                "You cannot vote for yourself".to_string(),
            ));
        }

        let attendance_repo = AttendanceRepository::new(self.db);
        let voter_attends = attendance_repo
            .find(schedule_id, voter_id)
            .await?
            .is_some_and(|a| a.is_attending());
        if !voter_attends {
            return Err(AppError::BadRequest(
                "Only attendees can vote for the MVP".to_string(),
            ));
        }
        let target_attends = attendance_repo
            .find(schedule_id, target_id)
            .await?
            .is_some_and(|a| a.is_attending());
        if !target_attends {
            return Err(AppError::BadRequest(
                "The MVP must be an attendee".to_string(),
            ));
        }

        attendance_repo
            .vote_mvp(schedule_id, voter_id, target_id)
            .await?;

        self.get_results(schedule_id).await
    }

    pub async fn get_results(&self, schedule_id: i32) -> Result<MvpResult, AppError> {
        if ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Schedule not found".to_string()));
        }

        let entries = AttendanceRepository::new(self.db)
            .get_mvp_counts(schedule_id)
            .await?
            .into_iter()
            .map(|(user_id, user_name, votes)| MvpEntry {
                user_id,
                user_name,
                votes,
            })
            .collect();

        Ok(MvpResult::from_entries(entries))
    }
}
