use super::*;

/// Tests voting and changing a vote.
///
/// Expected: one record per user, updated in place, MVP tally kept
#[tokio::test]
async fn upserts_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;

    let service = AttendanceService::new(db);
    let first = service
        .vote(schedule.id, player.id, AttendanceStatus::Attend, Utc::now())
        .await?;
    assert_eq!(first.team_id, team.id);

    let second = service
        .vote(schedule.id, player.id, AttendanceStatus::Absent, Utc::now())
        .await?;
    assert_eq!(first.id, second.id);

    let summary = service.get_attendance(schedule.id).await?;
    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.absent, 1);
    assert_eq!(summary.attend, 0);

    Ok(())
}

/// Tests voting after the deadline.
///
/// Expected: Err(BadRequest), also exactly at the deadline
#[tokio::test]
async fn rejects_after_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;

    let service = AttendanceService::new(db);
    for now in [schedule.vote_deadline, schedule.vote_deadline + Duration::minutes(1)] {
        let result = service
            .vote(schedule.id, owner.id, AttendanceStatus::Attend, now)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests voting on a PENDING fixture.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host_owner, _, _, _, schedule) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Pending)
            .await?;

    let result = AttendanceService::new(db)
        .vote(schedule.id, host_owner.id, AttendanceStatus::Attend, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests which side a vote is recorded for.
///
/// Expected: invited members vote for the invited team, dual members for the host
#[tokio::test]
async fn resolves_voting_side() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, host, invited_owner, invited, schedule) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Confirmed)
            .await?;
    let dual = factory::helpers::create_team_player(db, host.id).await?;
    factory::team_member::create_member(db, invited.id, dual.id).await?;

    let service = AttendanceService::new(db);
    let invited_vote = service
        .vote(schedule.id, invited_owner.id, AttendanceStatus::Attend, Utc::now())
        .await?;
    let dual_vote = service
        .vote(schedule.id, dual.id, AttendanceStatus::Attend, Utc::now())
        .await?;

    assert_eq!(invited_vote.team_id, invited.id);
    assert_eq!(dual_vote.team_id, host.id);

    Ok(())
}

/// Tests a vote from someone outside both teams.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let outsider = factory::user::create_user(db).await?;

    let result = AttendanceService::new(db)
        .vote(schedule.id, outsider.id, AttendanceStatus::Attend, Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
