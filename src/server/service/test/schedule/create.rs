use super::*;

/// Tests creating a squad schedule.
///
/// Expected: stored CONFIRMED with the host team's name
#[tokio::test]
async fn squad_starts_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;

    let created = ScheduleService::new(db)
        .create(params(team.id, owner.id, MatchType::Squad, None))
        .await?;

    assert_eq!(created.schedule.status, ScheduleStatus::Confirmed);
    assert_eq!(created.host_team_name, team.name);
    assert!(created.invited_team_name.is_none());

    Ok(())
}

/// Tests creating a team fixture.
///
/// Expected: stored PENDING awaiting the invited team
#[tokio::test]
async fn team_starts_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, host) = factory::helpers::create_team_with_owner(db).await?;
    let (_, invited) = factory::helpers::create_team_with_owner(db).await?;

    let created = ScheduleService::new(db)
        .create(params(host.id, owner.id, MatchType::Team, Some(invited.id)))
        .await?;

    assert_eq!(created.schedule.status, ScheduleStatus::Pending);
    assert_eq!(created.invited_team_name, Some(invited.name));

    Ok(())
}

/// Tests the invited team combinations that are not allowed.
///
/// Expected: Err(BadRequest) for squad with invitee, team without invitee, self invite
#[tokio::test]
async fn rejects_invalid_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, host) = factory::helpers::create_team_with_owner(db).await?;
    let (_, other) = factory::helpers::create_team_with_owner(db).await?;

    let service = ScheduleService::new(db);
    for request in [
        params(host.id, owner.id, MatchType::Squad, Some(other.id)),
        params(host.id, owner.id, MatchType::Team, None),
        params(host.id, owner.id, MatchType::Team, Some(host.id)),
    ] {
        let result = service.create(request).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests inviting a deleted team.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_deleted_invited_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, host) = factory::helpers::create_team_with_owner(db).await?;
    let other_owner = factory::user::create_user(db).await?;
    let deleted = factory::team::TeamFactory::new(db, other_owner.id)
        .deleted(true)
        .build()
        .await?;

    let result = ScheduleService::new(db)
        .create(params(host.id, owner.id, MatchType::Team, Some(deleted.id)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a vote deadline after kickoff.
///
/// Expected: Err(BadRequest), nothing stored
#[tokio::test]
async fn rejects_late_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;

    let mut request = params(team.id, owner.id, MatchType::Squad, None);
    request.vote_deadline = request.start_time + Duration::minutes(5);

    let service = ScheduleService::new(db);
    let result = service.create(request).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_by_team(team.id).await?.is_empty());

    Ok(())
}
