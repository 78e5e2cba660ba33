use super::*;

fn params(owner_id: i32, name: &str) -> CreateTeamParams {
    CreateTeamParams {
        owner_id,
        name: name.to_string(),
        description: None,
        region: None,
        logo_url: None,
    }
}

/// Tests creating a team.
///
/// Expected: team returned with the owner as its only member
#[tokio::test]
async fn creates_team_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let created = TeamService::new(db).create(params(owner.id, "Lions")).await?;

    assert_eq!(created.team.name, "Lions");
    assert_eq!(created.member_count, 1);

    let members = TeamService::new(db).get_members(created.team.id).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].member.role, TeamMemberRole::Owner);

    Ok(())
}

/// Tests creating a team with a name already in use.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::team::TeamFactory::new(db, owner.id)
        .name("Lions")
        .build()
        .await?;

    let result = TeamService::new(db).create(params(owner.id, "Lions")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a team with an empty name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let result = TeamService::new(db).create(params(owner.id, "")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
