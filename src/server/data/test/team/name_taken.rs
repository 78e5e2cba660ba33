use super::*;

/// Tests that names of active teams are taken.
///
/// Expected: Ok(true) for the active name, Ok(false) for an unused one
#[tokio::test]
async fn detects_active_team_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::team::TeamFactory::new(db, owner.id)
        .name("Gangnam United")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(repo.name_taken("Gangnam United", None).await?);
    assert!(!repo.name_taken("Gangnam City", None).await?);

    Ok(())
}

/// Tests that a deleted team frees its name.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_deleted_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::team::TeamFactory::new(db, owner.id)
        .name("Old Boys")
        .deleted(true)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(!repo.name_taken("Old Boys", None).await?);

    Ok(())
}

/// Tests that a team keeping its own name on update is not a conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn excludes_team_being_renamed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let team = factory::team::TeamFactory::new(db, owner.id)
        .name("Seocho FS")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(!repo.name_taken("Seocho FS", Some(team.id)).await?);

    Ok(())
}
