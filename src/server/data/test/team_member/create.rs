use super::*;

/// Tests creating a pending join request and finding it again.
///
/// Expected: Ok with a PENDING MEMBER membership returned by find
#[tokio::test]
async fn creates_pending_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;

    let repo = TeamMemberRepository::new(db);
    let created = repo
        .create(
            team.id,
            applicant.id,
            TeamMemberRole::Member,
            TeamMemberStatus::Pending,
        )
        .await?;

    let found = repo.find(team.id, applicant.id).await?.unwrap();
    assert_eq!(found, created);
    assert!(!found.is_approved());
    assert!(!found.can_manage());

    Ok(())
}

/// Tests approving a pending membership.
///
/// Expected: Ok with status APPROVED
#[tokio::test]
async fn approves_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let pending = factory::team_member::TeamMemberFactory::new(db, team.id, applicant.id)
        .status(TeamMemberStatus::Pending)
        .build()
        .await?;

    let repo = TeamMemberRepository::new(db);
    let approved = repo
        .set_status(pending.id, TeamMemberStatus::Approved)
        .await?;

    assert!(approved.is_approved());

    Ok(())
}

/// Tests finding a membership that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_outsider() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = TeamMemberRepository::new(db);
    assert!(repo.find(team.id, outsider.id).await?.is_none());

    Ok(())
}
