use super::*;

/// Tests creating then editing a post.
///
/// Expected: Ok with the new title and content and the author's display name attached
#[tokio::test]
async fn updates_title_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .nickname(Some("keeper"))
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            author_id: author.id,
            team_id: None,
            title: "Sunday game".to_string(),
            content: "Who is in?".to_string(),
        })
        .await?;
    assert_eq!(post.author_name, "keeper");

    let updated = repo
        .update(UpdatePostParams {
            id: post.id,
            title: "Sunday game moved".to_string(),
            content: "Now at 10am".to_string(),
        })
        .await?;

    assert_eq!(updated.title, "Sunday game moved");
    assert_eq!(updated.content, "Now at 10am");

    Ok(())
}

/// Tests the view counter, hiding and soft deletion.
///
/// Expected: Ok with view_count 2, and the flags reflected by find_by_id
#[tokio::test]
async fn tracks_views_and_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.increment_view_count(post.id).await?;
    repo.increment_view_count(post.id).await?;
    repo.set_hidden(post.id, true).await?;
    repo.soft_delete(post.id).await?;

    let stored = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);
    assert!(stored.is_hidden);
    assert!(stored.is_deleted);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .update(UpdatePostParams {
            id: 42,
            title: "t".to_string(),
            content: "c".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
