use super::*;

/// Tests creating a post with padded title.
///
/// Expected: title stored without the surrounding whitespace
#[tokio::test]
async fn stores_trimmed_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let post = PostService::new(db)
        .create(CreatePostParams {
            author_id: author.id,
            team_id: None,
            title: "  Sunday pickup game  ".to_string(),
            content: "Riverside Arena at 10".to_string(),
        })
        .await?;

    assert_eq!(post.title, "Sunday pickup game");

    Ok(())
}

/// Tests creating a post whose title is only whitespace.
///
/// Expected: Err(AppError::BadRequest) with nothing stored
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let result = PostService::new(db)
        .create(CreatePostParams {
            author_id: author.id,
            team_id: None,
            title: "   ".to_string(),
            content: "Riverside Arena at 10".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Post::find().all(db).await?.is_empty());

    Ok(())
}
