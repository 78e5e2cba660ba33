//! Match and lineup data repository.
//!
//! A match is never read without its lineup and goals, so the read methods assemble the
//! full `GameMatch` with player names resolved.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::ScheduleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::{attendance::team_has_attendees, user::UserRepository},
    model::{
        game::{CreateMatchParams, GameMatch, Goal, Lineup, LineupEntry},
        schedule::status_after_match_added,
    },
};

pub struct GameMatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameMatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a match with its lineup and advances the schedule status, all in one
    /// transaction.
    ///
    /// The match is numbered after the schedule's current last match. The new status is
    /// derived from the schedule row and ATTEND records read inside the transaction, so a
    /// concurrent status change is never overwritten with a stale value.
    ///
    /// # Returns
    /// - `Ok((match_id, status))` - ID of the created match and the schedule's resulting status
    /// - `Err(DbErr::RecordNotFound)` - Schedule does not exist
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create_with_lineups(
        &self,
        params: CreateMatchParams,
    ) -> Result<(i32, ScheduleStatus), DbErr> {
        let txn = self.db.begin().await?;

        let schedule = entity::prelude::Schedule::find_by_id(params.schedule_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("schedule {}", params.schedule_id)))?;

        let host_attending = team_has_attendees(&txn, schedule.id, schedule.host_team_id).await?;
        let invited_attending = match schedule.invited_team_id {
            Some(invited) => team_has_attendees(&txn, schedule.id, invited).await?,
            None => false,
        };
        let schedule_status = status_after_match_added(
            schedule.match_type,
            schedule.status,
            host_attending,
            invited_attending,
        );

        let last = entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::ScheduleId.eq(params.schedule_id))
            .order_by_desc(entity::game_match::Column::MatchOrder)
            .limit(1)
            .one(&txn)
            .await?;
        let match_order = last.map(|m| m.match_order).unwrap_or(0) + 1;

        let game_match = entity::game_match::ActiveModel {
            schedule_id: ActiveValue::Set(params.schedule_id),
            match_order: ActiveValue::Set(match_order),
            home_team_id: ActiveValue::Set(params.home_team_id),
            away_team_id: ActiveValue::Set(params.away_team_id),
            home_score: ActiveValue::Set(0),
            away_score: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_lineups(&txn, game_match.id, &params.lineups).await?;

        if schedule_status != schedule.status {
            entity::prelude::Schedule::update_many()
                .filter(entity::schedule::Column::Id.eq(params.schedule_id))
                .set(entity::schedule::ActiveModel {
                    status: ActiveValue::Set(schedule_status),
                    ..Default::default()
                })
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok((game_match.id, schedule_status))
    }

    /// Replaces a match's lineup in one transaction.
    pub async fn replace_lineups(
        &self,
        match_id: i32,
        lineups: &[LineupEntry],
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Lineup::delete_many()
            .filter(entity::lineup::Column::MatchId.eq(match_id))
            .exec(&txn)
            .await?;
        insert_lineups(&txn, match_id, lineups).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Finds a match row without lineup or goals.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameMatch>, DbErr> {
        let entity = entity::prelude::GameMatch::find_by_id(id).one(self.db).await?;

        Ok(entity.map(GameMatch::from_entity))
    }

    /// Finds a match with its lineup and goals.
    pub async fn find_with_details(&self, id: i32) -> Result<Option<GameMatch>, DbErr> {
        let Some(entity) = entity::prelude::GameMatch::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.attach_details(vec![entity]).await?.pop())
    }

    /// Gets all matches of a schedule in play order, with lineups and goals.
    pub async fn get_by_schedule(&self, schedule_id: i32) -> Result<Vec<GameMatch>, DbErr> {
        let entities = entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(entity::game_match::Column::MatchOrder)
            .all(self.db)
            .await?;

        self.attach_details(entities).await
    }

    /// Gets the user IDs in a match's lineup.
    pub async fn get_lineup_user_ids(&self, match_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Lineup::find()
            .filter(entity::lineup::Column::MatchId.eq(match_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|l| l.user_id).collect())
    }

    /// Deletes a match. Lineups and goals go with it through foreign key cascades.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::GameMatch::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn attach_details(
        &self,
        matches: Vec<entity::game_match::Model>,
    ) -> Result<Vec<GameMatch>, DbErr> {
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let match_ids: Vec<i32> = matches.iter().map(|m| m.id).collect();

        let lineups = entity::prelude::Lineup::find()
            .filter(entity::lineup::Column::MatchId.is_in(match_ids.clone()))
            .order_by_asc(entity::lineup::Column::Id)
            .all(self.db)
            .await?;
        let goals = entity::prelude::GoalRecord::find()
            .filter(entity::goal_record::Column::MatchId.is_in(match_ids))
            .order_by_asc(entity::goal_record::Column::CreatedAt)
            .order_by_asc(entity::goal_record::Column::Id)
            .all(self.db)
            .await?;

        let mut user_ids: Vec<i32> = lineups
            .iter()
            .map(|l| l.user_id)
            .chain(goals.iter().map(|g| g.scorer_id))
            .chain(goals.iter().filter_map(|g| g.assist_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let names = UserRepository::new(self.db)
            .get_display_names(&user_ids)
            .await?;
        let name_of = |id: i32| names.get(&id).cloned().unwrap_or_default();

        let mut lineups_by_match: HashMap<i32, Vec<Lineup>> = HashMap::new();
        for lineup in lineups {
            lineups_by_match
                .entry(lineup.match_id)
                .or_default()
                .push(Lineup {
                    user_id: lineup.user_id,
                    user_name: name_of(lineup.user_id),
                    side: lineup.side,
                });
        }

        let mut goals_by_match: HashMap<i32, Vec<Goal>> = HashMap::new();
        for goal in goals {
            goals_by_match.entry(goal.match_id).or_default().push(Goal {
                id: goal.id,
                match_id: goal.match_id,
                scorer_id: goal.scorer_id,
                scorer_name: name_of(goal.scorer_id),
                assist_id: goal.assist_id,
                assist_name: goal.assist_id.map(name_of),
                side: goal.side,
                is_own_goal: goal.is_own_goal,
                created_at: goal.created_at,
            });
        }

        Ok(matches
            .into_iter()
            .map(|entity| {
                let id = entity.id;
                let mut game_match = GameMatch::from_entity(entity);
                game_match.lineups = lineups_by_match.remove(&id).unwrap_or_default();
                game_match.goals = goals_by_match.remove(&id).unwrap_or_default();
                game_match
            })
            .collect())
    }
}

async fn insert_lineups<C: ConnectionTrait>(
    conn: &C,
    match_id: i32,
    lineups: &[LineupEntry],
) -> Result<(), DbErr> {
    if lineups.is_empty() {
        return Ok(());
    }

    let rows = lineups.iter().map(|entry| entity::lineup::ActiveModel {
        match_id: ActiveValue::Set(match_id),
        user_id: ActiveValue::Set(entry.user_id),
        side: ActiveValue::Set(entry.side),
        ..Default::default()
    });

    entity::prelude::Lineup::insert_many(rows).exec(conn).await?;
    Ok(())
}
