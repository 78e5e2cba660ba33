use super::*;

/// Tests accepting and declining invitations.
///
/// Expected: accept gives CONFIRMED, decline gives REJECTED
#[tokio::test]
async fn accept_and_decline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, first) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Pending)
            .await?;
    let (_, _, _, _, second) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Pending)
            .await?;

    let service = ScheduleService::new(db);
    let accepted = service.respond_invitation(first.id, true).await?;
    let declined = service.respond_invitation(second.id, false).await?;

    assert_eq!(accepted.schedule.status, ScheduleStatus::Confirmed);
    assert_eq!(declined.schedule.status, ScheduleStatus::Rejected);

    Ok(())
}

/// Tests answering an invitation that was already answered.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn only_pending_can_be_answered() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, schedule) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Confirmed)
            .await?;

    let result = ScheduleService::new(db)
        .respond_invitation(schedule.id, false)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests expiry of unanswered invitations.
///
/// Expected: only the PENDING schedule past kickoff is rejected
#[tokio::test]
async fn expires_unanswered_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, host) = factory::helpers::create_team_with_owner(db).await?;
    let (_, invited) = factory::helpers::create_team_with_owner(db).await?;
    let past = Utc::now() - Duration::hours(1);

    let expired = factory::schedule::ScheduleFactory::new(db, host.id, owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(invited.id))
        .status(ScheduleStatus::Pending)
        .start_time(past)
        .vote_deadline(past - Duration::hours(1))
        .build()
        .await?;
    let upcoming = factory::schedule::ScheduleFactory::new(db, host.id, owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(invited.id))
        .status(ScheduleStatus::Pending)
        .build()
        .await?;

    let service = ScheduleService::new(db);
    let count = service.reject_expired_invitations(Utc::now()).await?;

    assert_eq!(count, 1);
    assert_eq!(service.get(expired.id).await?.status, ScheduleStatus::Rejected);
    assert_eq!(service.get(upcoming.id).await?.status, ScheduleStatus::Pending);

    Ok(())
}
