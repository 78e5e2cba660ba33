use super::*;

/// Tests that deleting a goal decrements the credited side's score.
///
/// Expected: Ok with the goal removed and the home score back to 0
#[tokio::test]
async fn decrements_credited_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let game_match = factory::create_match(db, schedule.id).await?;

    let repo = GoalRepository::new(db);
    let created = repo
        .create(goal(game_match.id, owner.id, None, LineupSide::Home))
        .await?;
    repo.delete(created.id).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());
    let stored = entity::prelude::GameMatch::find_by_id(game_match.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, 0);

    Ok(())
}

/// Tests that the score never drops below zero.
///
/// The match was recorded with a 0:0 score while a home goal row exists.
///
/// Expected: Ok with the home score still 0
#[tokio::test]
async fn score_never_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let game_match = factory::create_match(db, schedule.id).await?;

    let repo = GoalRepository::new(db);
    let created = repo
        .create(goal(game_match.id, owner.id, None, LineupSide::Home))
        .await?;
    entity::prelude::GameMatch::update_many()
        .filter(entity::game_match::Column::Id.eq(game_match.id))
        .col_expr(entity::game_match::Column::HomeScore, Expr::value(0))
        .exec(db)
        .await?;

    repo.delete(created.id).await?;

    let stored = entity::prelude::GameMatch::find_by_id(game_match.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, 0);

    Ok(())
}

/// Tests deleting a goal that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_goal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GoalRepository::new(db);
    let result = repo.delete(5).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
