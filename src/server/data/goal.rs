//! Goal record repository and player statistics queries.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use entity::sea_orm_active_enums::LineupSide;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    model::game::{sort_stat_lines, CreateGoalParams, PlayerStatLine},
};

pub struct GoalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GoalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a goal and increments the credited side's score in one transaction.
    ///
    /// # Returns
    /// - `Ok(goal)` - The created goal record
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(
        &self,
        params: CreateGoalParams,
    ) -> Result<entity::goal_record::Model, DbErr> {
        let txn = self.db.begin().await?;

        let goal = entity::goal_record::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            scorer_id: ActiveValue::Set(params.scorer_id),
            assist_id: ActiveValue::Set(params.assist_id),
            side: ActiveValue::Set(params.side),
            is_own_goal: ActiveValue::Set(params.is_own_goal),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(column) = score_column(params.side) {
            entity::prelude::GameMatch::update_many()
                .filter(entity::game_match::Column::Id.eq(params.match_id))
                .col_expr(column, Expr::col(column).add(1))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(goal)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::goal_record::Model>, DbErr> {
        entity::prelude::GoalRecord::find_by_id(id).one(self.db).await
    }

    /// Deletes a goal and decrements the credited side's score in one transaction.
    ///
    /// The score never drops below zero.
    ///
    /// # Returns
    /// - `Ok(())` - Goal removed
    /// - `Err(DbErr::RecordNotFound)` - No goal with that ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let goal = entity::prelude::GoalRecord::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Goal {} not found", id)))?;

        entity::prelude::GoalRecord::delete_by_id(goal.id)
            .exec(&txn)
            .await?;

        if let Some(column) = score_column(goal.side) {
            entity::prelude::GameMatch::update_many()
                .filter(entity::game_match::Column::Id.eq(goal.match_id))
                .filter(column.gt(0))
                .col_expr(column, Expr::col(column).sub(1))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Per-player goals and assists over all matches of a schedule.
    pub async fn get_schedule_stats(&self, schedule_id: i32) -> Result<Vec<PlayerStatLine>, DbErr> {
        let match_ids = self
            .match_ids(Condition::all().add(entity::schedule::Column::Id.eq(schedule_id)))
            .await?;

        self.aggregate(&match_ids, None).await
    }

    /// Per-player goals and assists of a team's approved members, over all schedules the
    /// team hosted or was invited to.
    pub async fn get_team_stats(&self, team_id: i32) -> Result<Vec<PlayerStatLine>, DbErr> {
        let match_ids = self
            .match_ids(
                Condition::any()
                    .add(entity::schedule::Column::HostTeamId.eq(team_id))
                    .add(entity::schedule::Column::InvitedTeamId.eq(team_id)),
            )
            .await?;

        let members: HashSet<i32> = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(
                entity::team_member::Column::Status
                    .eq(entity::sea_orm_active_enums::TeamMemberStatus::Approved),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        self.aggregate(&match_ids, Some(&members)).await
    }

    /// Career goals (own goals excluded) and assists of a user.
    pub async fn get_totals_for_user(&self, user_id: i32) -> Result<(u64, u64), DbErr> {
        let goals = entity::prelude::GoalRecord::find()
            .filter(entity::goal_record::Column::ScorerId.eq(user_id))
            .filter(entity::goal_record::Column::IsOwnGoal.eq(false))
            .count(self.db)
            .await?;
        let assists = entity::prelude::GoalRecord::find()
            .filter(entity::goal_record::Column::AssistId.eq(user_id))
            .count(self.db)
            .await?;

        Ok((goals, assists))
    }

    async fn match_ids(&self, schedule_condition: Condition) -> Result<Vec<i32>, DbErr> {
        let schedule_ids: Vec<i32> = entity::prelude::Schedule::find()
            .filter(schedule_condition)
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();
        if schedule_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::ScheduleId.is_in(schedule_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect())
    }

    async fn aggregate(
        &self,
        match_ids: &[i32],
        only_users: Option<&HashSet<i32>>,
    ) -> Result<Vec<PlayerStatLine>, DbErr> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        let goals = entity::prelude::GoalRecord::find()
            .filter(entity::goal_record::Column::MatchId.is_in(match_ids.to_vec()))
            .all(self.db)
            .await?;

        let included = |user_id: &i32| only_users.map_or(true, |users| users.contains(user_id));

        // user_id -> (goals, assists)
        let mut totals: HashMap<i32, (u64, u64)> = HashMap::new();
        for goal in goals {
            if !goal.is_own_goal && included(&goal.scorer_id) {
                totals.entry(goal.scorer_id).or_default().0 += 1;
            }
            if let Some(assist_id) = goal.assist_id.filter(|id| included(id)) {
                totals.entry(assist_id).or_default().1 += 1;
            }
        }

        let user_ids: Vec<i32> = totals.keys().copied().collect();
        let names = UserRepository::new(self.db)
            .get_display_names(&user_ids)
            .await?;

        let mut lines: Vec<PlayerStatLine> = totals
            .into_iter()
            .map(|(user_id, (goals, assists))| PlayerStatLine {
                user_id,
                user_name: names.get(&user_id).cloned().unwrap_or_default(),
                goals,
                assists,
            })
            .collect();
        sort_stat_lines(&mut lines);

        Ok(lines)
    }
}

fn score_column(side: LineupSide) -> Option<entity::game_match::Column> {
    match side {
        LineupSide::Home => Some(entity::game_match::Column::HomeScore),
        LineupSide::Away => Some(entity::game_match::Column::AwayScore),
        LineupSide::Undecided => None,
    }
}
