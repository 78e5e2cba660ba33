//! Match and lineup factories.

use chrono::Utc;
use entity::sea_orm_active_enums::LineupSide;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GameMatchFactory<'a> {
    db: &'a DatabaseConnection,
    schedule_id: i32,
    match_order: i32,
    home_team_id: Option<i32>,
    away_team_id: Option<i32>,
    home_score: i32,
    away_score: i32,
}

impl<'a> GameMatchFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, schedule_id: i32) -> Self {
        Self {
            db,
            schedule_id,
            match_order: 1,
            home_team_id: None,
            away_team_id: None,
            home_score: 0,
            away_score: 0,
        }
    }

    pub fn match_order(mut self, match_order: i32) -> Self {
        self.match_order = match_order;
        self
    }

    pub fn teams(mut self, home_team_id: Option<i32>, away_team_id: Option<i32>) -> Self {
        self.home_team_id = home_team_id;
        self.away_team_id = away_team_id;
        self
    }

    pub fn score(mut self, home_score: i32, away_score: i32) -> Self {
        self.home_score = home_score;
        self.away_score = away_score;
        self
    }

    pub async fn build(self) -> Result<entity::game_match::Model, DbErr> {
        entity::game_match::ActiveModel {
            schedule_id: ActiveValue::Set(self.schedule_id),
            match_order: ActiveValue::Set(self.match_order),
            home_team_id: ActiveValue::Set(self.home_team_id),
            away_team_id: ActiveValue::Set(self.away_team_id),
            home_score: ActiveValue::Set(self.home_score),
            away_score: ActiveValue::Set(self.away_score),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates match number 1 of `schedule_id` with no teams and a 0:0 score.
pub async fn create_match(
    db: &DatabaseConnection,
    schedule_id: i32,
) -> Result<entity::game_match::Model, DbErr> {
    GameMatchFactory::new(db, schedule_id).build().await
}

/// Places `user_id` on `side` of `match_id`.
pub async fn create_lineup(
    db: &DatabaseConnection,
    match_id: i32,
    user_id: i32,
    side: LineupSide,
) -> Result<entity::lineup::Model, DbErr> {
    entity::lineup::ActiveModel {
        match_id: ActiveValue::Set(match_id),
        user_id: ActiveValue::Set(user_id),
        side: ActiveValue::Set(side),
        ..Default::default()
    }
    .insert(db)
    .await
}
