use super::*;

/// Tests updating a team's details.
///
/// Expected: Ok with all editable fields replaced
#[tokio::test]
async fn updates_team_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(UpdateTeamParams {
            id: team.id,
            name: "Renamed FC".to_string(),
            description: Some("Tuesday nights".to_string()),
            region: Some("Incheon".to_string()),
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
        })
        .await?;

    assert_eq!(updated.id, team.id);
    assert_eq!(updated.name, "Renamed FC");
    assert_eq!(updated.region.as_deref(), Some("Incheon"));
    assert_eq!(
        updated.logo_url.as_deref(),
        Some("https://cdn.example.com/logo.png")
    );

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .update(UpdateTeamParams {
            id: 42,
            name: "Nobody".to_string(),
            description: None,
            region: None,
            logo_url: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
