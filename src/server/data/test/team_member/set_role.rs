use super::*;

/// Tests promoting a member to manager.
///
/// Expected: Ok with role MANAGER and management rights
#[tokio::test]
async fn promotes_member_to_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::create_user(db).await?;
    let membership = factory::create_member(db, team.id, player.id).await?;

    let repo = TeamMemberRepository::new(db);
    let updated = repo.set_role(membership.id, TeamMemberRole::Manager).await?;

    assert_eq!(updated.role, TeamMemberRole::Manager);
    assert!(updated.can_manage());

    Ok(())
}

/// Tests removing a membership.
///
/// Expected: Ok and the membership is gone
#[tokio::test]
async fn deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let player = factory::create_user(db).await?;
    let membership = factory::create_member(db, team.id, player.id).await?;

    let repo = TeamMemberRepository::new(db);
    repo.delete(membership.id).await?;

    assert!(repo.find(team.id, player.id).await?.is_none());

    Ok(())
}
