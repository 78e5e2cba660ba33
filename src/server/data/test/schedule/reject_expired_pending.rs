use super::*;

/// Tests the expiry sweep for unanswered invitations.
///
/// Only PENDING schedules that already started are rejected; future invitations and
/// confirmed schedules are untouched.
///
/// Expected: Ok(1) and only the expired invitation REJECTED
#[tokio::test]
async fn rejects_only_started_pending_schedules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, host) = factory::helpers::create_team_with_owner(db).await?;
    let (_invited_owner, invited) = factory::helpers::create_team_with_owner(db).await?;
    let past = Utc::now() - Duration::hours(1);

    let expired = factory::schedule::ScheduleFactory::new(db, host.id, owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(invited.id))
        .status(ScheduleStatus::Pending)
        .start_time(past)
        .vote_deadline(past - Duration::days(1))
        .build()
        .await?;
    let upcoming = factory::schedule::ScheduleFactory::new(db, host.id, owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(invited.id))
        .status(ScheduleStatus::Pending)
        .build()
        .await?;
    let confirmed_past = factory::schedule::ScheduleFactory::new(db, host.id, owner.id)
        .start_time(past)
        .vote_deadline(past - Duration::days(1))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let rejected = repo.reject_expired_pending(Utc::now()).await?;

    assert_eq!(rejected, 1);
    let expired = repo.find_by_id(expired.id).await?.unwrap();
    let upcoming = repo.find_by_id(upcoming.id).await?.unwrap();
    let confirmed_past = repo.find_by_id(confirmed_past.id).await?.unwrap();
    assert_eq!(expired.status, ScheduleStatus::Rejected);
    assert_eq!(upcoming.status, ScheduleStatus::Pending);
    assert_eq!(confirmed_past.status, ScheduleStatus::Confirmed);

    Ok(())
}
