use super::*;

/// Tests an admin passing the admin check.
///
/// Expected: Ok(User) with is_admin set
#[tokio::test]
async fn grants_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin);

    Ok(())
}

/// Tests a regular user failing the admin check.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's ID
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests an anonymous request.
///
/// Expected: Err(AuthError::UserNotInSession), while current_user returns None
#[tokio::test]
async fn rejects_anonymous_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);

    assert!(guard.current_user().await?.is_none());
    assert!(matches!(
        guard.require(&[]).await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests the onboarding check.
///
/// Expected: Err(AuthError::NotOnboarded) before onboarding, Ok afterwards
#[tokio::test]
async fn requires_onboarding() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let fresh = factory::user::UserFactory::new(db)
        .onboarded(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(fresh.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Onboarded])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOnboarded(_)))
    ));

    let onboarded = factory::user::UserFactory::new(db)
        .onboarded(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(onboarded.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Onboarded])
        .await?;
    assert_eq!(user.id, onboarded.id);

    Ok(())
}
