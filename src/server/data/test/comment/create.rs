use super::*;

/// Tests creating a top-level comment and a reply.
///
/// Expected: Ok with both listed oldest first and the reply pointing at its parent
#[tokio::test]
async fn creates_comment_and_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = CommentRepository::new(db);
    let parent = repo
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: author.id,
            parent_id: None,
            content: "Count me in".to_string(),
        })
        .await?;
    let reply = repo
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: author.id,
            parent_id: Some(parent.id),
            content: "Me too".to_string(),
        })
        .await?;

    let comments = repo.get_by_post(post.id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, parent.id);
    assert_eq!(comments[1].id, reply.id);
    assert_eq!(comments[1].parent_id, Some(parent.id));
    assert_eq!(repo.count_replies(parent.id).await?, 1);

    Ok(())
}

/// Tests editing a comment's content.
///
/// Expected: Ok with the new content
#[tokio::test]
async fn updates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_comment(db, post.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.update_content(comment.id, "edited".to_string()).await?;

    assert_eq!(updated.content, "edited");

    Ok(())
}
