use super::*;

/// Tests that goals increment the credited side's score.
///
/// Expected: Ok with a 2:1 score after two home goals and one away goal
#[tokio::test]
async fn increments_credited_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let game_match = factory::create_match(db, schedule.id).await?;

    let repo = GoalRepository::new(db);
    repo.create(goal(game_match.id, owner.id, None, LineupSide::Home))
        .await?;
    repo.create(goal(game_match.id, owner.id, None, LineupSide::Home))
        .await?;
    repo.create(goal(game_match.id, owner.id, None, LineupSide::Away))
        .await?;

    let stored = entity::prelude::GameMatch::find_by_id(game_match.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, 2);
    assert_eq!(stored.away_score, 1);

    Ok(())
}
