//! Matches, lineups, goals and goal statistics.

use std::collections::HashSet;

use entity::sea_orm_active_enums::LineupSide;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, game_match::GameMatchRepository, goal::GoalRepository,
        schedule::ScheduleRepository, team::TeamRepository,
    },
    error::AppError,
    model::{
        game::{
            AddMatchResult, CreateGoalParams, CreateMatchParams, GameMatch, LineupEntry,
            PlayerStatLine,
        },
        schedule::Schedule,
    },
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a match with its lineup and advances the schedule status.
    ///
    /// # Returns
    /// - `Ok(AddMatchResult)` - The match with lineup, and the schedule's resulting status
    /// - `Err(AppError::NotFound)` - Schedule does not exist
    /// - `Err(AppError::BadRequest)` - Schedule not active, a team outside the schedule,
    ///   or an invalid lineup
    pub async fn add_match(&self, params: CreateMatchParams) -> Result<AddMatchResult, AppError> {
        let schedule = self.find_schedule(params.schedule_id).await?;

        if !schedule.is_active() {
            return Err(AppError::BadRequest(
                "Matches can only be added to confirmed schedules".to_string(),
            ));
        }

        let schedule_teams = schedule.team_ids();
        for team_id in [params.home_team_id, params.away_team_id].into_iter().flatten() {
            if !schedule_teams.contains(&team_id) {
                return Err(AppError::BadRequest(format!(
                    "Team {} does not take part in this schedule",
                    team_id
                )));
            }
        }

        self.validate_lineups(schedule.id, &params.lineups).await?;

        let (match_id, schedule_status) = GameMatchRepository::new(self.db)
            .create_with_lineups(params)
            .await?;

        tracing::info!(
            "Match {} added to schedule {}, schedule status {:?}",
            match_id,
            schedule.id,
            schedule_status
        );

        Ok(AddMatchResult {
            game_match: self.get_match(match_id).await?,
            schedule_status,
        })
    }

    /// Replaces the lineup of a match.
    pub async fn update_lineup(
        &self,
        match_id: i32,
        lineups: Vec<LineupEntry>,
    ) -> Result<GameMatch, AppError> {
        let game_match = self.get_match(match_id).await?;
        self.validate_lineups(game_match.schedule_id, &lineups).await?;

        GameMatchRepository::new(self.db)
            .replace_lineups(match_id, &lineups)
            .await?;

        self.get_match(match_id).await
    }

    pub async fn delete_match(&self, match_id: i32) -> Result<(), AppError> {
        self.get_match(match_id).await?;

        GameMatchRepository::new(self.db).delete(match_id).await?;

        Ok(())
    }

    pub async fn get_matches(&self, schedule_id: i32) -> Result<Vec<GameMatch>, AppError> {
        self.find_schedule(schedule_id).await?;

        Ok(GameMatchRepository::new(self.db)
            .get_by_schedule(schedule_id)
            .await?)
    }

    pub async fn get_match(&self, match_id: i32) -> Result<GameMatch, AppError> {
        GameMatchRepository::new(self.db)
            .find_with_details(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
    }

    /// Gets the schedule a match belongs to, for permission checks.
    pub async fn get_match_schedule(&self, match_id: i32) -> Result<Schedule, AppError> {
        let game_match = GameMatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;

        self.find_schedule(game_match.schedule_id).await
    }

    /// Gets the schedule a goal was scored in, for permission checks.
    pub async fn get_goal_schedule(&self, goal_id: i32) -> Result<Schedule, AppError> {
        let goal = GoalRepository::new(self.db)
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))?;

        self.get_match_schedule(goal.match_id).await
    }

    /// Records a goal and returns the match with its updated score.
    ///
    /// # Returns
    /// - `Ok(GameMatch)` - The match after the goal
    /// - `Err(AppError::NotFound)` - Match does not exist
    /// - `Err(AppError::BadRequest)` - Scorer or assist outside the lineup, assist equal to
    ///   the scorer, an own goal with an assist, or no side credited
    pub async fn add_goal(&self, params: CreateGoalParams) -> Result<GameMatch, AppError> {
        let game_match = self.get_match(params.match_id).await?;

        if params.side == LineupSide::Undecided {
            return Err(AppError::BadRequest(
                "A goal must be credited to HOME or AWAY".to_string(),
            ));
        }

        let in_lineup = |user_id: i32| game_match.lineups.iter().any(|l| l.user_id == user_id);
        if !in_lineup(params.scorer_id) {
            return Err(AppError::BadRequest(
                "The scorer is not in the match lineup".to_string(),
            ));
        }

        if let Some(assist_id) = params.assist_id {
            if params.is_own_goal {
                return Err(AppError::BadRequest(
                    "Own goals cannot have an assist".to_string(),
                ));
            }
            if assist_id == params.scorer_id {
                return Err(AppError::BadRequest(
                    "A player cannot assist their own goal".to_string(),
                ));
            }
            if !in_lineup(assist_id) {
                return Err(AppError::BadRequest(
                    "The assisting player is not in the match lineup".to_string(),
                ));
            }
        }

        let match_id = params.match_id;
        GoalRepository::new(self.db).create(params).await?;

        self.get_match(match_id).await
    }

    /// Removes a goal and returns the match with its updated score.
    pub async fn delete_goal(&self, goal_id: i32) -> Result<GameMatch, AppError> {
        let goal_repo = GoalRepository::new(self.db);
        let goal = goal_repo
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))?;

        goal_repo.delete(goal_id).await?;

        self.get_match(goal.match_id).await
    }

    pub async fn schedule_stats(&self, schedule_id: i32) -> Result<Vec<PlayerStatLine>, AppError> {
        self.find_schedule(schedule_id).await?;

        Ok(GoalRepository::new(self.db)
            .get_schedule_stats(schedule_id)
            .await?)
    }

    pub async fn team_stats(&self, team_id: i32) -> Result<Vec<PlayerStatLine>, AppError> {
        if TeamRepository::new(self.db)
            .find_active_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(GoalRepository::new(self.db).get_team_stats(team_id).await?)
    }

    async fn find_schedule(&self, schedule_id: i32) -> Result<Schedule, AppError> {
        ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))
    }

    /// Every lineup player must appear once and must have voted to attend.
    async fn validate_lineups(
        &self,
        schedule_id: i32,
        lineups: &[LineupEntry],
    ) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        if !lineups.iter().all(|entry| seen.insert(entry.user_id)) {
            return Err(AppError::BadRequest(
                "A player appears more than once in the lineup".to_string(),
            ));
        }

        let attending: HashSet<i32> = AttendanceRepository::new(self.db)
            .get_attending_user_ids(schedule_id)
            .await?
            .into_iter()
            .collect();

        if let Some(entry) = lineups.iter().find(|e| !attending.contains(&e.user_id)) {
            return Err(AppError::BadRequest(format!(
                "User {} has not voted to attend this schedule",
                entry.user_id
            )));
        }

        Ok(())
    }
}
