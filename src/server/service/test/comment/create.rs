use super::*;

/// Tests replying to a top-level comment.
///
/// Expected: reply stored with its parent
#[tokio::test]
async fn creates_reply() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;
    let parent = factory::comment::create_comment(db, post.id, author.id).await?;

    let created = CommentService::new(db)
        .create(reply(post.id, author.id, parent.id))
        .await?;

    assert_eq!(created.parent_id, Some(parent.id));

    Ok(())
}

/// Tests the parent rules.
///
/// Expected: Err(BadRequest) for a reply to a reply, to a deleted comment, and to a
/// comment on another post
#[tokio::test]
async fn rejects_invalid_parents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;
    let other_post = factory::post::create_post(db, author.id).await?;
    let parent = factory::comment::create_comment(db, post.id, author.id).await?;
    let nested = factory::comment::CommentFactory::new(db, post.id, author.id)
        .parent_id(Some(parent.id))
        .build()
        .await?;
    let deleted = factory::comment::CommentFactory::new(db, post.id, author.id)
        .deleted(true)
        .build()
        .await?;
    let foreign = factory::comment::create_comment(db, other_post.id, author.id).await?;

    let service = CommentService::new(db);
    for parent_id in [nested.id, deleted.id, foreign.id] {
        let result = service.create(reply(post.id, author.id, parent_id)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests commenting on a deleted post.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_deleted_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .deleted(true)
        .build()
        .await?;

    let result = CommentService::new(db)
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: author.id,
            parent_id: None,
            content: "Hello".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
