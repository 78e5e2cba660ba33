use super::*;

/// Tests profile statistics over attendance and goals.
///
/// Expected: attended schedules and goals counted, absences ignored
#[tokio::test]
async fn aggregates_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let other_schedule = factory::schedule::create_schedule(db, team.id, owner.id).await?;

    factory::attendance::create_attendance(db, schedule.id, owner.id, team.id).await?;
    factory::attendance::AttendanceFactory::new(db, other_schedule.id, owner.id, team.id)
        .status(AttendanceStatus::Absent)
        .build()
        .await?;

    let game_match = factory::game_match::create_match(db, schedule.id).await?;
    GoalRepository::new(db)
        .create(CreateGoalParams {
            match_id: game_match.id,
            scorer_id: owner.id,
            assist_id: None,
            side: LineupSide::Home,
            is_own_goal: false,
        })
        .await?;

    let profile = UserService::new(db).get_profile(owner.id).await?;

    assert_eq!(profile.stats.attended_schedules, 1);
    assert_eq!(profile.stats.goals, 1);
    assert_eq!(profile.stats.assists, 0);

    Ok(())
}

/// Tests the profile of a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_user_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_profile(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
