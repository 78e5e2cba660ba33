use super::*;

/// Tests paginating teams.
///
/// Verifies that deleted teams are excluded from both the page and the total.
///
/// Expected: Ok with 2 teams on the first page and a total of 3
#[tokio::test]
async fn paginates_active_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_team(db, owner.id).await?;
    }
    factory::team::TeamFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let (first, total) = repo.get_paginated(0, 2).await?;
    let (second, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first.iter().chain(second.iter()).all(|t| !t.is_deleted));

    Ok(())
}

/// Tests paginating with no teams.
///
/// Expected: Ok with an empty page and a total of 0
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let (teams, total) = repo.get_paginated(0, 10).await?;

    assert!(teams.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
