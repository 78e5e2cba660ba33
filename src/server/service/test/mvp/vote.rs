use super::*;

/// Creates a READY squad schedule with three attendees.
async fn setup(db: &sea_orm::DatabaseConnection) -> Result<(i32, [i32; 3]), AppError> {
    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let schedule = factory::schedule::ScheduleFactory::new(db, team.id, owner.id)
        .status(ScheduleStatus::Ready)
        .build()
        .await?;
    let second = factory::helpers::create_team_player(db, team.id).await?;
    let third = factory::helpers::create_team_player(db, team.id).await?;

    for user_id in [owner.id, second.id, third.id] {
        factory::attendance::create_attendance(db, schedule.id, user_id, team.id).await?;
    }

    Ok((schedule.id, [owner.id, second.id, third.id]))
}

/// Tests casting and moving an MVP ballot.
///
/// Expected: tally follows the ballot, previous target loses the vote
#[tokio::test]
async fn moves_ballot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (schedule_id, [voter, first, second]) = setup(db).await?;

    let service = MvpService::new(db);
    let result = service.vote(schedule_id, voter, first).await?;
    assert_eq!(result.mvp_user_id, Some(first));

    let result = service.vote(schedule_id, voter, second).await?;
    assert_eq!(result.mvp_user_id, Some(second));
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].votes, 1);

    let repeat = service.vote(schedule_id, voter, second).await?;
    assert_eq!(repeat, result);

    Ok(())
}

/// Tests a tie at the top of the standings.
///
/// Expected: both entries listed, no MVP
#[tokio::test]
async fn tie_has_no_mvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (schedule_id, [a, b, _]) = setup(db).await?;

    let service = MvpService::new(db);
    service.vote(schedule_id, a, b).await?;
    let result = service.vote(schedule_id, b, a).await?;

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.mvp_user_id, None);

    Ok(())
}

/// Tests the MVP voting rules.
///
/// Expected: Err(BadRequest) for self votes, absent targets and absent voters
#[tokio::test]
async fn rejects_invalid_votes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (schedule_id, [voter, _, _]) = setup(db).await?;

    let schedule = ScheduleService::new(db)
        .get(schedule_id)
        .await?;
    let absentee = factory::helpers::create_team_player(db, schedule.host_team_id).await?;
    factory::attendance::AttendanceFactory::new(db, schedule_id, absentee.id, schedule.host_team_id)
        .status(AttendanceStatus::Absent)
        .build()
        .await?;

    let service = MvpService::new(db);
    for (from, to) in [(voter, voter), (voter, absentee.id), (absentee.id, voter)] {
        let result = service.vote(schedule_id, from, to).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests voting before any match was recorded.
///
/// Expected: Err(BadRequest) on a CONFIRMED schedule
#[tokio::test]
async fn rejects_confirmed_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;
    factory::attendance::create_attendance(db, schedule.id, owner.id, team.id).await?;
    factory::attendance::create_attendance(db, schedule.id, player.id, team.id).await?;

    let result = MvpService::new(db).vote(schedule.id, owner.id, player.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
