//! Schedules: squad scrimmages and team-versus-team fixtures.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MatchType, ScheduleStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{schedule::ScheduleRepository, team::TeamRepository},
    error::AppError,
    model::schedule::{
        initial_status, validate_schedule_window, CreateScheduleParams, Schedule,
        ScheduleWithTeams, UpdateScheduleParams,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a schedule hosted by `params.host_team_id`.
    ///
    /// SQUAD schedules start CONFIRMED and must not name an invited team. TEAM schedules
    /// start PENDING until the invited team responds.
    ///
    /// # Returns
    /// - `Ok(ScheduleWithTeams)` - The created schedule
    /// - `Err(AppError::BadRequest)` - Invalid time window or invited team combination
    /// - `Err(AppError::NotFound)` - Host or invited team missing or deleted
    pub async fn create(
        &self,
        params: CreateScheduleParams,
    ) -> Result<ScheduleWithTeams, AppError> {
        validate_schedule_window(
            &params.place,
            params.start_time,
            params.end_time,
            params.vote_deadline,
        )?;

        let team_repo = TeamRepository::new(self.db);
        if team_repo
            .find_active_by_id(params.host_team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        match (params.match_type, params.invited_team_id) {
            (MatchType::Squad, Some(_)) => {
                return Err(AppError::BadRequest(
                    "Squad schedules cannot invite a team".to_string(),
                ));
            }
            (MatchType::Team, None) => {
                return Err(AppError::BadRequest(
                    "Team schedules require an invited team".to_string(),
                ));
            }
            (MatchType::Team, Some(invited)) if invited == params.host_team_id => {
                return Err(AppError::BadRequest(
                    "A team cannot invite itself".to_string(),
                ));
            }
            (MatchType::Team, Some(invited)) => {
                if team_repo.find_active_by_id(invited).await?.is_none() {
                    return Err(AppError::NotFound("Invited team not found".to_string()));
                }
            }
            (MatchType::Squad, None) => {}
        }

        let status = initial_status(params.match_type);
        let schedule = ScheduleRepository::new(self.db)
            .create(params, status)
            .await?;

        tracing::info!(
            "Schedule {} created for team {} with status {:?}",
            schedule.id,
            schedule.host_team_id,
            schedule.status
        );

        self.get_by_id(schedule.id).await
    }

    /// Gets a schedule row, used to resolve which teams may act on it.
    pub async fn get(&self, id: i32) -> Result<Schedule, AppError> {
        ScheduleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ScheduleWithTeams, AppError> {
        ScheduleRepository::new(self.db)
            .find_with_teams(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<ScheduleWithTeams>, AppError> {
        if TeamRepository::new(self.db)
            .find_active_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(ScheduleRepository::new(self.db).get_by_team(team_id).await?)
    }

    /// Accepts or declines a TEAM invitation. Only PENDING schedules can be answered.
    pub async fn respond_invitation(
        &self,
        id: i32,
        accept: bool,
    ) -> Result<ScheduleWithTeams, AppError> {
        let schedule = self.get(id).await?;

        if schedule.status != ScheduleStatus::Pending {
            return Err(AppError::BadRequest(
                "This invitation is no longer pending".to_string(),
            ));
        }

        let status = if accept {
            ScheduleStatus::Confirmed
        } else {
            ScheduleStatus::Rejected
        };
        ScheduleRepository::new(self.db)
            .update_status(id, status)
            .await?;

        tracing::info!("Schedule {} invitation answered: {:?}", id, status);

        self.get_by_id(id).await
    }

    pub async fn update(
        &self,
        params: UpdateScheduleParams,
    ) -> Result<ScheduleWithTeams, AppError> {
        self.get(params.id).await?;
        validate_schedule_window(
            &params.place,
            params.start_time,
            params.end_time,
            params.vote_deadline,
        )?;

        let id = params.id;
        ScheduleRepository::new(self.db).update(params).await?;

        self.get_by_id(id).await
    }

    /// Deletes a schedule with its attendance, matches and photo rows.
    ///
    /// # Returns
    /// - `Ok(keys)` - Storage object keys of the removed photos, for the caller to clean up
    /// - `Err(AppError::NotFound)` - Schedule does not exist
    pub async fn delete(&self, id: i32) -> Result<Vec<String>, AppError> {
        self.get(id).await?;

        let object_keys = ScheduleRepository::new(self.db).delete(id).await?;

        tracing::info!(
            "Deleted schedule {} with {} photo(s)",
            id,
            object_keys.len()
        );

        Ok(object_keys)
    }

    /// Rejects TEAM invitations that were never answered before kickoff.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of schedules moved to REJECTED
    pub async fn reject_expired_invitations(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(ScheduleRepository::new(self.db)
            .reject_expired_pending(now)
            .await?)
    }
}
