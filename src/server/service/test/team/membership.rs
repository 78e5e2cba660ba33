use super::*;

/// Tests the join request and approval flow.
///
/// Expected: request stored PENDING, approval moves it to APPROVED
#[tokio::test]
async fn request_then_approve() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::user::create_user(db).await?;

    let service = TeamService::new(db);
    let pending = service.request_join(team.id, player.id).await?;
    assert_eq!(pending.status, TeamMemberStatus::Pending);
    assert_eq!(pending.role, TeamMemberRole::Member);

    let approved = service.approve_member(team.id, player.id).await?;
    assert_eq!(approved.status, TeamMemberStatus::Approved);

    let again = service.approve_member(team.id, player.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting to join a team twice.
///
/// Expected: Err(BadRequest) on the second request
#[tokio::test]
async fn rejects_duplicate_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::user::create_user(db).await?;

    let service = TeamService::new(db);
    service.request_join(team.id, player.id).await?;
    let result = service.request_join(team.id, player.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests role changes.
///
/// Expected: MEMBER promoted to MANAGER; assigning OWNER or changing the owner fails
#[tokio::test]
async fn change_role_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::helpers::create_team_player(db, team.id).await?;

    let service = TeamService::new(db);
    let promoted = service
        .change_role(team.id, player.id, TeamMemberRole::Manager)
        .await?;
    assert_eq!(promoted.role, TeamMemberRole::Manager);

    let to_owner = service
        .change_role(team.id, player.id, TeamMemberRole::Owner)
        .await;
    assert!(matches!(to_owner, Err(AppError::BadRequest(_))));

    let demote_owner = service
        .change_role(team.id, owner.id, TeamMemberRole::Member)
        .await;
    assert!(matches!(demote_owner, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a pending member cannot be given a role.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn pending_member_cannot_be_promoted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::user::create_user(db).await?;
    factory::team_member::TeamMemberFactory::new(db, team.id, player.id)
        .status(TeamMemberStatus::Pending)
        .build()
        .await?;

    let result = TeamService::new(db)
        .change_role(team.id, player.id, TeamMemberRole::Manager)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests member removal permissions.
///
/// Expected: a member may leave, may not remove others, a manager may remove others,
/// and nobody removes the owner
#[tokio::test]
async fn remove_member_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let first = factory::helpers::create_team_player(db, team.id).await?;
    let second = factory::helpers::create_team_player(db, team.id).await?;
    let manager = factory::user::create_user(db).await?;
    factory::team_member::TeamMemberFactory::new(db, team.id, manager.id)
        .role(TeamMemberRole::Manager)
        .build()
        .await?;

    let service = TeamService::new(db);
    let first_user = User::from_entity(first.clone());
    let manager_user = User::from_entity(manager.clone());
    let owner_user = User::from_entity(owner.clone());

    let denied = service.remove_member(team.id, &first_user, second.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.remove_member(team.id, &manager_user, second.id).await?;
    service.remove_member(team.id, &first_user, first.id).await?;

    let remove_owner = service.remove_member(team.id, &owner_user, owner.id).await;
    assert!(matches!(remove_owner, Err(AppError::BadRequest(_))));

    let members = service.get_members(team.id).await?;
    let ids: Vec<i32> = members.iter().map(|m| m.member.user_id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&owner.id));
    assert!(ids.contains(&manager.id));

    Ok(())
}
