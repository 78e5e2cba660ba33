use super::*;

/// Tests per-schedule statistics.
///
/// Own goals are not credited to the scorer but assists always count.
///
/// Expected: Ok with lines sorted by goals then assists
#[tokio::test]
async fn aggregates_schedule_goals_and_assists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;
    let game_match = factory::create_match(db, schedule.id).await?;

    let repo = GoalRepository::new(db);
    repo.create(goal(game_match.id, owner.id, Some(player.id), LineupSide::Home))
        .await?;
    repo.create(goal(game_match.id, owner.id, None, LineupSide::Home))
        .await?;
    repo.create(CreateGoalParams {
        is_own_goal: true,
        ..goal(game_match.id, player.id, None, LineupSide::Away)
    })
    .await?;

    let lines = repo.get_schedule_stats(schedule.id).await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].user_id, owner.id);
    assert_eq!((lines[0].goals, lines[0].assists), (2, 0));
    assert_eq!(lines[1].user_id, player.id);
    assert_eq!((lines[1].goals, lines[1].assists), (0, 1));

    assert_eq!(repo.get_totals_for_user(player.id).await?, (0, 1));

    Ok(())
}

/// Tests per-team statistics across schedules.
///
/// Goals by players who are not members of the team are left out.
///
/// Expected: Ok with only the team member's line
#[tokio::test]
async fn team_stats_only_include_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host_owner, host, invited_owner, _invited, schedule) =
        factory::helpers::create_team_schedule_with_dependencies(
            db,
            entity::sea_orm_active_enums::ScheduleStatus::Play,
        )
        .await?;
    let game_match = factory::create_match(db, schedule.id).await?;

    let repo = GoalRepository::new(db);
    repo.create(goal(game_match.id, host_owner.id, None, LineupSide::Home))
        .await?;
    repo.create(goal(game_match.id, invited_owner.id, None, LineupSide::Away))
        .await?;

    let lines = repo.get_team_stats(host.id).await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].user_id, host_owner.id);
    assert_eq!(lines[0].goals, 1);

    Ok(())
}
