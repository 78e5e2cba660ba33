use super::*;

/// Tests deleting a post without comments.
///
/// Expected: row removed
#[tokio::test]
async fn hard_deletes_without_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;

    PostService::new(db)
        .delete(&User::from_entity(author), post.id)
        .await?;

    assert!(entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a post with comments.
///
/// Expected: row kept with is_deleted, comments kept
#[tokio::test]
async fn soft_deletes_with_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;
    factory::comment::create_comment(db, post.id, author.id).await?;

    PostService::new(db)
        .delete(&User::from_entity(author), post.id)
        .await?;

    let stored = entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);
    assert_eq!(entity::prelude::Comment::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests deletion rights.
///
/// Expected: other users denied, admins allowed
#[tokio::test]
async fn author_or_admin_may_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = User::from_entity(factory::user::create_user(db).await?);
    let admin = User::from_entity(
        factory::user::UserFactory::new(db).admin(true).build().await?,
    );
    let post = factory::post::create_post(db, author.id).await?;

    let service = PostService::new(db);
    let denied = service.delete(&other, post.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete(&admin, post.id).await?;

    Ok(())
}
