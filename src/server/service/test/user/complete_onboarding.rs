use super::*;

/// Tests onboarding a fresh account.
///
/// Expected: nickname stored trimmed, position set and account marked onboarded
#[tokio::test]
async fn onboards_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname(None)
        .onboarded(false)
        .build()
        .await?;

    let service = UserService::new(db);
    let updated = service
        .complete_onboarding(
            user.id,
            "  striker  ".to_string(),
            PlayerPosition::Pivo,
            Some("Seoul".to_string()),
        )
        .await?;

    assert!(updated.is_onboarded);
    assert_eq!(updated.nickname.as_deref(), Some("striker"));
    assert_eq!(updated.position, Some(PlayerPosition::Pivo));
    assert_eq!(updated.region.as_deref(), Some("Seoul"));

    Ok(())
}

/// Tests onboarding with a nickname another user holds.
///
/// Expected: Err(BadRequest) and the account stays not onboarded
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname(Some("keeper"))
        .build()
        .await?;
    let user = factory::user::UserFactory::new(db)
        .nickname(None)
        .onboarded(false)
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service
        .complete_onboarding(user.id, "keeper".to_string(), PlayerPosition::Goleiro, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = service.get_user(user.id).await?.unwrap();
    assert!(!stored.is_onboarded);

    Ok(())
}

/// Tests re-running onboarding with the user's own nickname.
///
/// Expected: Ok, a user never collides with themselves
#[tokio::test]
async fn keeps_own_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname(Some("ala"))
        .build()
        .await?;

    let updated = UserService::new(db)
        .complete_onboarding(user.id, "ala".to_string(), PlayerPosition::Ala, None)
        .await?;

    assert_eq!(updated.nickname.as_deref(), Some("ala"));

    Ok(())
}

/// Tests a one-character nickname.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_short_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = UserService::new(db)
        .complete_onboarding(user.id, " a ".to_string(), PlayerPosition::Fixo, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
