use super::*;

/// Tests storing anonymous feedback.
///
/// Expected: Ok with no user attached
#[tokio::test]
async fn stores_anonymous_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create_feedback(None, "More evening games please".to_string())
        .await?;

    assert_eq!(feedback.user_id, None);
    assert_eq!(feedback.content, "More evening games please");

    Ok(())
}

/// Tests storing feedback from a signed-in user.
///
/// Expected: Ok with the user's ID attached
#[tokio::test]
async fn stores_user_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create_feedback(Some(user.id), "Great app".to_string())
        .await?;

    assert_eq!(feedback.user_id, Some(user.id));

    Ok(())
}
