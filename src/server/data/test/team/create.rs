use super::*;

/// Tests creating a team together with its owner membership.
///
/// Expected: Ok with the team stored and exactly one APPROVED OWNER membership
#[tokio::test]
async fn creates_team_with_owner_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            owner_id: owner.id,
            name: "FC Mapo".to_string(),
            description: Some("Weekend futsal".to_string()),
            region: Some("Seoul".to_string()),
            logo_url: None,
        })
        .await?;

    assert_eq!(team.name, "FC Mapo");
    assert_eq!(team.owner_id, owner.id);
    assert!(!team.is_deleted);

    let members = entity::prelude::TeamMember::find().all(db).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].team_id, team.id);
    assert_eq!(members[0].user_id, owner.id);
    assert_eq!(members[0].role, TeamMemberRole::Owner);
    assert_eq!(members[0].status, TeamMemberStatus::Approved);

    Ok(())
}

/// Tests that a failed membership insert leaves no team behind.
///
/// The owner does not exist, so the membership foreign key fails inside the transaction.
///
/// Expected: Err and no team rows
#[tokio::test]
async fn rolls_back_when_owner_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .create(CreateTeamParams {
            owner_id: 999,
            name: "Ghost FC".to_string(),
            description: None,
            region: None,
            logo_url: None,
        })
        .await;

    assert!(result.is_err());
    let teams = entity::prelude::Team::find().all(db).await?;
    assert!(teams.is_empty());

    Ok(())
}
