use super::*;

async fn count_of(repo: &AttendanceRepository<'_>, schedule_id: i32, user_id: i32) -> i32 {
    repo.find(schedule_id, user_id)
        .await
        .unwrap()
        .unwrap()
        .mvp_count
}

/// Tests casting a first MVP vote.
///
/// Expected: Ok with the voter's target set and the target's count at 1
#[tokio::test]
async fn records_first_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;
    factory::create_attendance(db, schedule.id, owner.id, team.id).await?;
    factory::create_attendance(db, schedule.id, player.id, team.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.vote_mvp(schedule.id, owner.id, player.id).await?;

    let voter = repo.find(schedule.id, owner.id).await?.unwrap();
    assert_eq!(voter.mvp_target_id, Some(player.id));
    assert_eq!(count_of(&repo, schedule.id, player.id).await, 1);
    assert_eq!(count_of(&repo, schedule.id, owner.id).await, 0);

    Ok(())
}

/// Tests moving an MVP vote to a different player.
///
/// Expected: Ok with the old target decremented and the new target incremented
#[tokio::test]
async fn moves_vote_between_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let first = factory::helpers::create_team_player(db, team.id).await?;
    let second = factory::helpers::create_team_player(db, team.id).await?;
    factory::create_attendance(db, schedule.id, owner.id, team.id).await?;
    factory::create_attendance(db, schedule.id, first.id, team.id).await?;
    factory::create_attendance(db, schedule.id, second.id, team.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.vote_mvp(schedule.id, owner.id, first.id).await?;
    repo.vote_mvp(schedule.id, owner.id, second.id).await?;

    assert_eq!(count_of(&repo, schedule.id, first.id).await, 0);
    assert_eq!(count_of(&repo, schedule.id, second.id).await, 1);

    Ok(())
}

/// Tests voting for the current target again.
///
/// Expected: Ok with the count unchanged at 1
#[tokio::test]
async fn repeated_vote_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;
    factory::create_attendance(db, schedule.id, owner.id, team.id).await?;
    factory::create_attendance(db, schedule.id, player.id, team.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.vote_mvp(schedule.id, owner.id, player.id).await?;
    repo.vote_mvp(schedule.id, owner.id, player.id).await?;

    assert_eq!(count_of(&repo, schedule.id, player.id).await, 1);

    Ok(())
}

/// Tests that moving a vote never drives the previous target below zero.
///
/// The previous target's count is already 0, as after a manual correction.
///
/// Expected: Ok with the previous target still at 0
#[tokio::test]
async fn previous_target_never_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let first = factory::helpers::create_team_player(db, team.id).await?;
    let second = factory::helpers::create_team_player(db, team.id).await?;
    factory::attendance::AttendanceFactory::new(db, schedule.id, owner.id, team.id)
        .mvp_target_id(Some(first.id))
        .build()
        .await?;
    factory::create_attendance(db, schedule.id, first.id, team.id).await?;
    factory::create_attendance(db, schedule.id, second.id, team.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.vote_mvp(schedule.id, owner.id, second.id).await?;

    assert_eq!(count_of(&repo, schedule.id, first.id).await, 0);
    assert_eq!(count_of(&repo, schedule.id, second.id).await, 1);

    Ok(())
}

/// Tests voting without an attendance record.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_without_voter_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;
    factory::create_attendance(db, schedule.id, player.id, team.id).await?;

    let repo = AttendanceRepository::new(db);
    let result = repo.vote_mvp(schedule.id, owner.id, player.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(count_of(&repo, schedule.id, player.id).await, 0);

    Ok(())
}
